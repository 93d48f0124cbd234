pub mod chatbot_routes;

pub use chatbot_routes::create_chatbots_router;
