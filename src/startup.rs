use std::{net::TcpListener, sync::Arc};

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    domain::keyword::KeywordList,
    routes::{api_route, default_route, export_route, scan_route},
    services::PageFetcher,
};

pub fn run(
    listener: TcpListener,
    keywords: KeywordList,
    fetcher: Arc<dyn PageFetcher>,
) -> Result<Server, std::io::Error> {
    let keywords = web::Data::new(keywords);
    let fetcher: web::Data<dyn PageFetcher> = web::Data::from(fetcher);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(default_route::default)
            .service(default_route::health_check)
            .service(scan_route::scan_website)
            .service(export_route::export_csv)
            .service(
                web::scope("/api")
                    .service(api_route::scan_url)
                    .service(api_route::scan_text),
            )
            .app_data(keywords.clone())
            .app_data(fetcher.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
