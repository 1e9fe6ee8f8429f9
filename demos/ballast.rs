//! Ballast controller - relay trip, mains watch and serial commands on STM32F401
//!
//! Three tasks share the scheduler:
//! - ballast FSM: energises the ballast relay for one FSM step after a trip
//! - mains check: samples the mains sense input and reports transitions
//! - serial poll: `T` trips the ballast, anything else prints the usage
//!
//! PB4 and PB5 are edge detectors: their EXTI lines stay unmasked while the
//! scheduler sleeps, so an edge wakes the core between ticks.

#![no_std]
#![no_main]

use cortex_m::peripheral::NVIC;
use cortex_m_rt::entry;
use portable_atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use coopsched::pac;
use coopsched::pac::gpio::vals::{Moder, Pupdr};

// ============ Configuration ============

const TICK_INTERVAL_MS: u16 = 10;

/// FSM step period in ticks; the relay stays energised for one step
const BALLAST_INTERVAL: u16 = 10;

const MAINS_CHECK_MS: u32 = 100;

/// ADC reading above which mains is considered present (12-bit scale)
const MAINS_THRESHOLD: u16 = 861;

const COMMAND_THROW: u8 = b'T';

/// PA5 drives the ballast relay
const RELAY_PIN: usize = 5;

/// PA0 (ADC1_IN0) senses mains
const MAINS_PIN: usize = 0;

/// PB4 and PB5, pulled up, interrupt on every transition
const EDGE_PINS: [usize; 2] = [4, 5];

/// SYSCFG_EXTICR port code for GPIOB
const EXTI_PORT_B: u8 = 1;

// ============ Hardware ============

fn relay_init() {
    pac::RCC.ahb1enr().modify(|w| w.set_gpioaen(true));
    pac::GPIOA.moder().modify(|w| w.set_moder(RELAY_PIN, Moder::OUTPUT));
    pac::GPIOA.otyper().modify(|w| w.set_ot(RELAY_PIN, pac::gpio::vals::Ot::PUSHPULL));
    relay_off();
}

fn relay_on() { pac::GPIOA.bsrr().write(|w| w.set_bs(RELAY_PIN, true)); }

fn relay_off() { pac::GPIOA.bsrr().write(|w| w.set_br(RELAY_PIN, true)); }

fn mains_check_init() {
    pac::RCC.apb2enr().modify(|w| w.set_adc1en(true));
    pac::GPIOA.moder().modify(|w| w.set_moder(MAINS_PIN, Moder::ANALOG));
    pac::ADC1.cr2().modify(|w| w.set_adon(true));
}

fn mains_sample() -> u16 {
    pac::ADC1.cr2().modify(|w| w.set_swstart(true));
    while !pac::ADC1.sr().read().eoc() {}
    pac::ADC1.dr().read().0 as u16
}

/// USART2 on PA2/PA3, 9600 baud from the 16MHz HSI
fn serial_init() {
    pac::RCC.apb1enr().modify(|w| w.set_usart2en(true));
    for pin in [2, 3] {
        pac::GPIOA.moder().modify(|w| w.set_moder(pin, Moder::ALTERNATE));
        pac::GPIOA.afr(0).modify(|w| w.set_afr(pin, 7));
    }
    // 16MHz / (16 * 9600) = 104.1875
    pac::USART2.brr().write(|w| w.0 = (104 << 4) | 3);
    pac::USART2.cr1().modify(|w| {
        w.set_re(true);
        w.set_te(true);
        w.set_ue(true);
    });
}

fn edge_inputs_init() {
    pac::RCC.ahb1enr().modify(|w| w.set_gpioben(true));
    pac::RCC.apb2enr().modify(|w| w.set_syscfgen(true));

    for pin in EDGE_PINS {
        pac::GPIOB.moder().modify(|w| w.set_moder(pin, Moder::INPUT));
        pac::GPIOB.pupdr().modify(|w| w.set_pupdr(pin, Pupdr::PULLUP));
        pac::SYSCFG.exticr(pin / 4).modify(|w| w.set_exti(pin % 4, EXTI_PORT_B));
        pac::EXTI.rtsr(0).modify(|w| w.set_line(pin, true));
        pac::EXTI.ftsr(0).modify(|w| w.set_line(pin, true));
        pac::EXTI.pr(0).write(|w| w.set_line(pin, true));
        pac::EXTI.imr(0).modify(|w| w.set_line(pin, true));
    }

    unsafe {
        NVIC::unmask(pac::Interrupt::EXTI4);
        NVIC::unmask(pac::Interrupt::EXTI9_5);
    }
}

static EDGES: AtomicU32 = AtomicU32::new(0);

fn edge_ack(pin: usize) {
    if pac::EXTI.pr(0).read().line(pin) {
        pac::EXTI.pr(0).write(|w| w.set_line(pin, true));
        EDGES.fetch_add(1, Ordering::Relaxed);
    }
}

#[no_mangle]
pub extern "C" fn EXTI4() {
    edge_ack(4);
}

#[no_mangle]
pub extern "C" fn EXTI9_5() {
    edge_ack(5);
}

fn serial_read() -> Option<u8> {
    if pac::USART2.sr().read().rxne() {
        Some(pac::USART2.dr().read().0 as u8)
    } else {
        None
    }
}

// ============ Ballast FSM ============

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum BallastState {
    Idle = 0,
    Requested = 1,
    Active = 2,
}

impl BallastState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => BallastState::Requested,
            2 => BallastState::Active,
            _ => BallastState::Idle,
        }
    }
}

static BALLAST: AtomicU8 = AtomicU8::new(BallastState::Idle as u8);

fn ballast_throw() {
    BALLAST.store(BallastState::Requested as u8, Ordering::Relaxed);
}

fn ballast_fsm() {
    let next = match BallastState::from_u8(BALLAST.load(Ordering::Relaxed)) {
        BallastState::Idle => return,
        BallastState::Requested => {
            relay_on();
            BallastState::Active
        }
        BallastState::Active => {
            relay_off();
            BallastState::Idle
        }
    };
    BALLAST.store(next as u8, Ordering::Relaxed);
}

// ============ Mains check ============

static MAINS_ONLINE: AtomicBool = AtomicBool::new(false);
static EDGES_SEEN: AtomicU32 = AtomicU32::new(0);

fn mains_check() {
    let online = mains_sample() > MAINS_THRESHOLD;
    let was_online = MAINS_ONLINE.swap(online, Ordering::Relaxed);

    let edges = EDGES.load(Ordering::Relaxed);
    if EDGES_SEEN.swap(edges, Ordering::Relaxed) != edges {
        coopsched::debug!("{=u32} input edges", edges);
    }

    match (was_online, online) {
        (true, false) => coopsched::warn!("GRID FAILURE WARNING"),
        (false, true) => coopsched::info!("GRID POWER RESTORED"),
        _ => {}
    }
}

// ============ Serial commands ============

fn serial_command() {
    match serial_read() {
        Some(COMMAND_THROW) => {
            ballast_throw();
            coopsched::info!("Trip activated!");
        }
        Some(_) => coopsched::info!("T to trip."),
        None => {}
    }
}

// ============ Main ============

#[entry]
fn main() -> ! {
    relay_init();
    mains_check_init();
    serial_init();
    edge_inputs_init();

    coopsched::sch_init(TICK_INTERVAL_MS).expect("scheduler init failed");

    let mains_period = coopsched::ms_to_ticks(MAINS_CHECK_MS, TICK_INTERVAL_MS)
        .expect("mains period too long");

    coopsched::sch_add_task(ballast_fsm, 0, BALLAST_INTERVAL).expect("ballast task failed");
    coopsched::sch_add_task(mains_check, 0, mains_period).expect("mains task failed");
    coopsched::sch_add_task(serial_command, 0, 1).expect("serial task failed");

    coopsched::info!("Starting scheduler");
    coopsched::sch_start().expect("scheduler start failed");

    coopsched::sch_run()
}
