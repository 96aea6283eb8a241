pub mod asset;
pub mod chat;
pub mod map;
pub mod reply;
pub mod toast;

pub use asset::{effective_band_count, AssetKind, UploadedAsset, DEFAULT_BAND_COUNT};
pub use chat::{ChatMessage, Role};
pub use map::{MapInstance, MapLayer, CHOROPLETH_LAYER, MAP_GLOBAL_SLOT};
pub use reply::{AiReply, ColumnStats, StatBlock, Statistics};
pub use toast::{Toast, ToastKind, TOAST_TTL_MS};
