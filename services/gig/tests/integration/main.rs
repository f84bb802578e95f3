mod game_http_test;
mod health_http_test;
mod helpers;
mod saved_http_test;
mod tag_http_test;
mod user_http_test;
