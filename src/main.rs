//! cartreader-menu - Rotary-encoder menu firmware for nRF52840
//!
//! An SSD1306 OLED shows paged list menus; a rotary encoder with push
//! switch moves and commits the selection; an RGB LED gives press and
//! idle feedback.
//!
//! Everything runs in one cooperative loop polling every
//! `POLL_INTERVAL_MS`.

#![no_std]
#![no_main]

use core::mem::MaybeUninit;
use core::ptr::addr_of_mut;

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Duration, Timer};
use linked_list_allocator::LockedHeap;
use static_cell::ConstStaticCell;
use {defmt_rtt as _, panic_probe as _};

use cartreader_menu::config::{HEAP_SIZE, POLL_INTERVAL_MS};
use cartreader_menu::hw::{EmbassyClock, OledSurface, RgbLed, RotaryControl};
use cartreader_menu::ui::status::ERROR_COLOR;
use cartreader_menu::ui::StatusIndicator;
use cartreader_menu::{menus, Devices, Error, Navigator, Step};

#[global_allocator]
static ALLOCATOR: LockedHeap = LockedHeap::empty();

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// EasyDMA scratch for writes whose source lives in flash.
static TWIM_TX_BUFFER: ConstStaticCell<[u8; 32]> = ConstStaticCell::new([0; 32]);

fn init_heap() {
    static mut HEAP: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    // SAFETY: called once, before anything allocates; HEAP is never
    // touched again except through the allocator.
    unsafe {
        ALLOCATOR.lock().init(addr_of_mut!(HEAP) as *mut u8, HEAP_SIZE);
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    init_heap();

    info!("cartreader-menu starting");

    // ── OLED (I²C) ──────────────────────────────────────────────
    let i2c = Twim::new(
        p.TWISPI0,
        Irqs,
        p.P0_26,
        p.P0_27,
        twim::Config::default(),
        TWIM_TX_BUFFER.take(),
    );
    let display = OledSurface::new(i2c);

    // ── Rotary encoder + switch ─────────────────────────────────
    let encoder_a = Input::new(p.P0_03, Pull::Up);
    let encoder_b = Input::new(p.P0_04, Pull::Up);
    let switch = Input::new(p.P0_28, Pull::Up);
    let input = RotaryControl::new(encoder_a, encoder_b, switch);

    // ── RGB LED ─────────────────────────────────────────────────
    let status = RgbLed::new(
        Output::new(p.P0_13, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_14, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_15, Level::Low, OutputDrive::Standard),
    );

    let mut board = Devices {
        display,
        status,
        input,
        clock: EmbassyClock,
    };

    let mut navigator = Navigator::new(&mut board, menus::main_menu);
    info!("main menu ready");

    loop {
        match navigator.poll(&mut board) {
            Step::Idle => {}
            step => debug!("menu: {}", step),
        }

        let faults = [
            board.display.take_error(),
            board.input.take_error(),
            board.status.take_error(),
        ];
        for fault in faults.into_iter().flatten() {
            warn!("hardware fault: {}", fault);
            board.status.set_color(ERROR_COLOR);
            if fault == Error::Display {
                // Repaint the frame the bus dropped.
                navigator.redraw(&mut board);
            }
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}
