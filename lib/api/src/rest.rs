use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result as ActixResult};
use citygrid_core::{CityGraphGenerator, NodeLinkDocument};
use tracing::debug;

pub struct RestApi;

impl RestApi {
    pub async fn start(host: &str, port: u16) -> std::io::Result<()> {
        let generator = web::Data::new(CityGraphGenerator::default());

        HttpServer::new(move || {
            App::new()
                .wrap(Self::cors())
                .wrap(middleware::Logger::default())
                .app_data(generator.clone())
                .configure(Self::configure)
        })
        .bind((host, port))?
        .run()
        .await
    }

    /// Cross-origin requests are accepted from anywhere.
    pub fn cors() -> Cors {
        Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600)
    }

    /// Route table. Expects a `web::Data<CityGraphGenerator>` in app data.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(web::resource("/generate_city").route(web::get().to(generate_city)));
    }
}

async fn generate_city(
    generator: web::Data<CityGraphGenerator>,
) -> ActixResult<HttpResponse> {
    // thread-local generator, so concurrent workers never share RNG state
    let mut rng = rand::rng();
    let graph = generator.generate(&mut rng);
    let document = NodeLinkDocument::from(&graph);

    debug!(
        nodes = document.nodes.len(),
        links = document.links.len(),
        "serving generated city"
    );
    Ok(HttpResponse::Ok().json(document))
}
