#![allow(non_snake_case)]

use PortalLibrary::management::portal::Portal;

#[actix_web::main]
async fn main() {
    Portal::run().await;
    Portal::terminate().await;
}
