pub mod inspect_settings;
