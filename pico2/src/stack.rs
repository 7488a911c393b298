//! Stack high-water mark for RP2350.
//!
//! With the `init-stacks` feature cortex-m-rt paints the whole stack region
//! with [`STACK_PAINT_VALUE`] before `main`. Embassy runs every task on the
//! single main stack, which grows down from `_stack_start` towards
//! `_stack_end`, so the still-painted words just above `_stack_end` were
//! never used.
//!
//! # Memory Layout (RP2350)
//!
//! - RAM: 512KB at 0x20000000 (striped across SRAM0-7)
//! - Stack: top of RAM, limit given by the linker symbol `_stack_end`

use core::ptr::read_volatile;

use cortex_m::register::msp;
use hello_common::stack::{STACK_PAINT_VALUE, StackProbe, unused_painted_bytes, words_above_limit};

unsafe extern "C" {
    /// Lowest address of the stack region (cortex-m-rt `link.x`).
    static _stack_end: u32;
}

/// Scans the painted region between `_stack_end` and the current MSP.
pub struct PaintedStackProbe;

impl StackProbe for PaintedStackProbe {
    fn unused_bytes(&self) -> Option<usize> {
        // MSP outside the stack region: nothing sensible to measure
        let limit = (&raw const _stack_end).expose_provenance();
        let words = words_above_limit(limit, msp::read() as usize)?;

        // The symbol only marks an address; the scan needs a pointer valid
        // for the whole region, not for the one word it names
        let bottom = core::ptr::with_exposed_provenance::<u32>(limit);

        // SAFETY: [bottom, sp) lies inside the stack region reserved by the
        // linker. Interrupts may write into it concurrently, so each word is
        // read volatile instead of through a slice.
        let region = (0..words).map(|i| unsafe { read_volatile(bottom.add(i)) });
        Some(unused_painted_bytes(region, STACK_PAINT_VALUE))
    }
}
