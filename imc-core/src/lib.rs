pub mod budget;
pub mod channel;
pub mod kpi;
pub mod series;
pub mod timeline;
