pub mod enums;
pub mod error;
pub mod fetch;
pub mod ids;
pub mod inventory;
pub mod notification;
pub mod product;
pub mod session;

pub use enums::{IN_STOCK_ABOVE, LOW_STOCK_ABOVE, StockStatus, UserRole};
pub use error::{ModelError, Result};
pub use fetch::FetchState;
pub use ids::ProductId;
pub use inventory::{Inventory, InventorySummary};
pub use notification::{Notification, NotificationKind, Notifier};
pub use product::{
    DEFAULT_EXPIRY_WINDOW_DAYS, EXPIRY_NOT_APPLICABLE, ISO_DATE_FORMAT, ProductDetails,
    ProductRecord, format_iso_date, is_expiring_soon,
};
pub use session::{DEFAULT_API_BASE_URL, Session};
