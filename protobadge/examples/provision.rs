//! Optical provisioning demo — hold the read button against the web
//! flasher's blinking square to receive name/handle/pronouns.
//!
//! Decoded configurations are kept in a RAM store and logged via defmt;
//! a real application would wire in a flash-backed [`ConfigStore`].
//!
//! ```sh
//! cargo run --release --example provision
//! ```

#![no_std]
#![no_main]

use defmt::{
    info,
    warn,
};
use embassy_executor::Spawner;
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use protobadge::*;
use protobadge::store::{
    ConfigStore,
    RamStore,
};

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

#[embassy_executor::task]
async fn provision_task(flasher: &'static mut FlasherLink<'static>) {
    let mut store = RamStore::new();
    info!("hold the read button against the flasher to provision");

    loop {
        flasher.wait_for_hold().await;

        match flasher.read_config().await {
            Ok(config) => {
                store.save(&config).unwrap();
                info!("saved - badge now belongs to {}", config.name.as_str());
            }
            Err(_) => {
                // read_config already logged the reason
                warn!("try again: restart the flasher animation and re-hold");
            }
        }
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = protobadge::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let flasher = mk_static!(FlasherLink<'static>, resources.flasher.into());
    spawner.must_spawn(provision_task(flasher));

    loop {
        embassy_time::Timer::after(embassy_time::Duration::from_secs(600)).await;
    }
}
