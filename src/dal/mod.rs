pub mod scraped_data_db;
