mod chat_test;
mod health_test;
mod notifications_test;
mod technician_test;
mod tickets_test;
mod users_test;
