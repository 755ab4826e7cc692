mod character;
mod dress;
mod enemy;
mod equip;
mod event;
mod server_config;
