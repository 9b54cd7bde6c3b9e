//! src/startup.rs
use crate::configuration::Settings;
use crate::routes::{health_check, home, join};
use crate::store::{PgStore, WaitlistStore};
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use secrecy::ExposeSecret;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, anyhow::Error> {
    let address = format!("{}:{}", config.application.host, config.application.port);
    let tcp_listener = TcpListener::bind(address)?;
    let port = tcp_listener.local_addr()?.port();

    let store = PgStore::connect_lazy(config.database.connection_string().expose_secret())?;
    let server = run(tcp_listener, Arc::new(store))?;

    Ok(Application { port, server })
}

pub fn run(
    listener: TcpListener,
    store: Arc<dyn WaitlistStore>,
) -> Result<Server, std::io::Error> {
    let store = web::Data::from(store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/waitlist", web::post().to(join))

            // serving HTML files
            .route("/", web::get().to(home))

            .app_data(store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
