use crate::db::ChatLogStore;
use crate::middleware;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub fn run(listener: TcpListener, store: Arc<dyn ChatLogStore>) -> Result<Server, std::io::Error> {
    let store = web::Data::new(store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| middleware::catch_panic(req, srv))
            .wrap(middleware::last_resort())
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(middleware::json_config())
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
