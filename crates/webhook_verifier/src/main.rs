use webhook_verifier::{
    configs::settings::{CmdLineConf, Settings},
    core::errors::{ApplicationError, ApplicationResult},
    logger,
};

#[actix_web::main]
async fn main() -> ApplicationResult<()> {
    let cmd_line = <CmdLineConf as clap::Parser>::parse();

    #[allow(clippy::expect_used)]
    let conf = Settings::with_config_path(cmd_line.config_path)
        .expect("Unable to construct application configuration");
    #[allow(clippy::expect_used)]
    conf.validate()
        .expect("Failed to validate webhook verifier configuration");

    let _guard = logger::setup(
        &conf.log,
        verifier_env::service_name!(),
        vec![verifier_env::service_name!(), "actix_web"],
    );

    logger::info!("Webhook verifier started [{:?}] [{:?}]", conf.server, conf.log);

    let server = webhook_verifier::start_server(conf).await?;
    server.await.map_err(ApplicationError::from)?;

    Ok(())
}
