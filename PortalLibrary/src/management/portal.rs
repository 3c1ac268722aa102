use actix_web::{web, App, HttpServer};
use std::time::Duration;
use tokio::time::sleep;
use crate::management::processor::ImageProcessor;
use crate::utils::config::Config;
use crate::utils::logging::*;
use crate::web::api::{default, inference, javascript, log};

pub struct Portal;

impl Portal {
    pub async fn run() {
        logging_information!(SystemEntry::Initializing);
        let config = Config::load();
        let processor = web::Data::new(ImageProcessor::new(&config));
        let config_data = web::Data::new(config.clone());
        logging_information!(SystemEntry::InitializeComplete);
        let http_server = loop {
            let server = {
                let processor = processor.clone();
                let config_data = config_data.clone();
                HttpServer::new(move || {
                    App::new()
                        .app_data(processor.clone())
                        .app_data(config_data.clone())
                        .service(inference::initialize())
                        .service(javascript::initialize())
                        .service(log::initialize())
                        .default_service(web::route().to(default::default_route))
                }).bind(("0.0.0.0", config.http_server_bind_port))
            };
            match server {
                Ok(server) => break server,
                Err(err) => {
                    logging_critical!(SystemEntry::BindError(config.http_server_bind_port, err));
                    sleep(Duration::from_secs(config.bind_retry_duration)).await;
                    continue;
                }
            }
        };
        logging_information!(SystemEntry::WebReady);
        logging_information!(SystemEntry::Online);
        if let Err(err) = http_server.run().await {
            logging_emergency!(SystemEntry::WebPanic(err));
        }
    }

    pub async fn terminate() {
        logging_information!(SystemEntry::Terminating);
        logging_information!(SystemEntry::TerminateComplete);
    }
}
