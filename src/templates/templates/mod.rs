// Estrategias de renderizado disponibles, una por plantilla

mod compact;
mod corporate;
mod modern;

pub use compact::CompactTemplate;
pub use corporate::CorporateTemplate;
pub use modern::ModernTemplate;
