#[actix_web::main]
async fn main() -> std::io::Result<()> {
    onestop_jpn_server::run().await
}
