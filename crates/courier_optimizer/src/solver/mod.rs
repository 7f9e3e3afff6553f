pub mod center_weights;
pub mod cost_engine;
pub mod exhaustive_search;
pub mod linear_start_search;
pub mod quote;
pub mod route;
pub mod route_context;
pub mod route_evaluator;
pub mod route_search;
