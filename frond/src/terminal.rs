// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kitty graphics protocol framing.

use std::io::Write;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Maximum payload bytes the protocol allows per escape chunk.
const CHUNK: usize = 4096;

/// Transmit a PNG to the terminal for immediate display
/// (`a=T`: transmit and display, `f=100`: PNG data).
///
/// The base64 payload is split into 4096-byte chunks, with `m=1` on every
/// chunk but the last.
pub(crate) fn transmit_png(out: &mut impl Write, png: &[u8]) -> std::io::Result<()> {
    let payload = STANDARD.encode(png);
    let mut chunks = payload.as_bytes().chunks(CHUNK).peekable();
    let mut first = true;

    while let Some(chunk) = chunks.next() {
        let more = u8::from(chunks.peek().is_some());
        if first {
            write!(out, "\x1b_Ga=T,f=100,m={more};")?;
            first = false;
        } else {
            write!(out, "\x1b_Gm={more};")?;
        }
        out.write_all(chunk)?;
        write!(out, "\x1b\\")?;
    }
    writeln!(out)?;
    Ok(())
}
