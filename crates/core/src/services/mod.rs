mod app_card;

pub use app_card::AppCardService;
