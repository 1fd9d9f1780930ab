use actix_web::web;

pub mod backend_health;
pub mod game_results;
pub mod matchups;
pub mod user_results;
pub mod votes;

use crate::middleware::session::SessionMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/api")
            .service(matchups::get_nfl_matchups)
            .service(game_results::get_game_results)
            .service(game_results::store_game_result)
            .service(votes::get_matchup_votes)
            .service(user_results::get_all_user_results)
            // Session routes: the caller's identity comes from the session token
            .service(
                web::resource("/votes")
                    .wrap(SessionMiddleware)
                    .route(web::post().to(votes::submit_vote))
            )
            .service(
                web::resource("/user-results")
                    .wrap(SessionMiddleware)
                    .route(web::get().to(user_results::get_user_results))
            )
    );
}
