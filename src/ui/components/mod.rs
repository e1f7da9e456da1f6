pub mod breakdown_table;
pub mod kpi_card;
pub mod recommendation_banner;
pub mod toast;
