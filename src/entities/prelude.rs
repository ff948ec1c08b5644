pub use super::average_prices::Entity as AveragePrices;
pub use super::categories::Entity as Categories;
pub use super::daily_prices::Entity as DailyPrices;
pub use super::items::Entity as Items;
pub use super::latest_prices::Entity as LatestPrices;
pub use super::materials::Entity as Materials;
pub use super::productions::Entity as Productions;
pub use super::skills::Entity as Skills;
