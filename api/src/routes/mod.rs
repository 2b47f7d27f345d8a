use axum::Router;

mod health;
mod navigation;
mod program;
mod registration;
mod roster;
mod season;
mod team;
mod upload;

pub fn configure_routes(router: Router) -> Router {
    let api = Router::new()
        .merge(health::configure())
        .nest("/seasons", season::configure())
        .nest("/programs", program::configure())
        .nest("/registrations", registration::configure())
        .nest("/teams", team::configure().merge(roster::configure()))
        .nest("/uploads", upload::configure())
        .nest("/navigation", navigation::configure());

    router.nest("/api", api)
}
