mod api;
mod health_check_api;
