//! Persisted register state: a text dump/read format (spec §6), grounded
//! in `examples/original_source/qstate.cc`'s `Dump`/`Read`.
//!
//! Format:
//! ```text
//! QSTATE SIZE <N>
//! <+re> \t <+im> \t |0x<index>>
//! ...
//! ```
//! Only nonzero amplitudes are written. `N` must match the reader's
//! register size; amplitudes are read back by index, leaving every other
//! slot at zero, then the total probability is checked against the
//! normalization tolerance.

use std::io::{BufRead, BufReader, Read, Write};

use tracing::{debug, warn};

use crate::{error::SimError, math::C, register::QReg};

/// Write every nonzero amplitude of `reg` to `writer` in the persisted
/// text format.
pub fn dump(reg: &QReg, writer: &mut impl Write) -> Result<(), SimError> {
    writeln!(writer, "QSTATE SIZE {}", reg.outcomes())?;
    for i in 0..reg.outcomes() {
        let amp = reg.get(i);
        if amp.re != 0.0 || amp.im != 0.0 {
            writeln!(writer, "{:+1.17} \t {:+1.17} \t |0x{:X}>", amp.re, amp.im, i)?;
        }
    }
    debug!(outcomes = reg.outcomes(), "dumped register state");
    Ok(())
}

/// Parse a persisted dump into a fresh register. The header's declared
/// size must equal `2^qubit_count`.
pub fn read(qubit_count: crate::math::N, reader: impl Read) -> Result<QReg, SimError> {
    let mut lines = BufReader::new(reader).lines();

    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| SimError::PreconditionViolation("empty persisted state file".into()))?;
    let size: usize = header
        .strip_prefix("QSTATE SIZE ")
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| {
            SimError::PreconditionViolation(format!("malformed header line: {header:?}"))
        })?;

    let expected = 1usize << qubit_count;
    if size != expected {
        return Err(SimError::PreconditionViolation(format!(
            "persisted size {size} does not match {qubit_count}-qubit register ({expected} amplitudes)"
        )));
    }

    let mut amplitudes = vec![C::new(0.0, 0.0); size];
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (re, im, index) = parse_amplitude_line(&line)?;
        amplitudes[index] = C::new(re, im);
    }

    let reg = QReg::new_with_amplitudes(qubit_count, amplitudes)?;
    if !reg.within_normalization_tolerance() {
        warn!(
            total = reg.total_probability(),
            "persisted state's total probability drifted outside tolerance"
        );
    }
    Ok(reg)
}

fn parse_amplitude_line(line: &str) -> Result<(f64, f64, usize), SimError> {
    let malformed = || SimError::PreconditionViolation(format!("malformed amplitude line: {line:?}"));

    let mut fields = line.split('\t').map(str::trim);
    let re: f64 = fields.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    let im: f64 = fields.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    let ket = fields.next().ok_or_else(malformed)?;
    let hex = ket
        .strip_prefix("|0x")
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(malformed)?;
    let index = usize::from_str_radix(hex, 16).map_err(|_| malformed())?;

    Ok((re, im, index))
}

/// Render `reg` as a ket expansion skipping negligible amplitudes, one
/// term per line: `(re, im) |index>` (spec §3's "effectively zero"
/// display/skip behavior).
pub fn format_ket_expansion(reg: &QReg) -> String {
    let mut out = String::new();
    for i in 0..reg.outcomes() {
        if reg.is_negligible_at(i) {
            continue;
        }
        let amp = reg.get(i);
        out.push_str(&format!("({:+.6}, {:+.6}) |0x{:X}>\n", amp.re, amp.im, i));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::C_ONE;
    use std::io::Cursor;

    #[test]
    fn round_trips_ground_state() {
        let reg = QReg::new(2);
        let mut buf = Vec::new();
        dump(&reg, &mut buf).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("QSTATE SIZE 4\n"));

        let restored = read(2, Cursor::new(buf)).unwrap();
        assert_eq!(restored.get(0), C_ONE);
        for i in 1..restored.outcomes() {
            assert_eq!(restored.get(i).norm_sqr(), 0.0);
        }
    }

    #[test]
    fn round_trips_superposition() {
        let half = C::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        let reg = QReg::new_with_amplitudes(1, vec![half, half]).unwrap();
        let mut buf = Vec::new();
        dump(&reg, &mut buf).unwrap();

        let restored = read(1, Cursor::new(buf)).unwrap();
        assert!((restored.get(0).re - half.re).abs() < 1e-12);
        assert!((restored.get(1).re - half.re).abs() < 1e-12);
    }

    #[test]
    fn rejects_size_mismatch() {
        let reg = QReg::new(1);
        let mut buf = Vec::new();
        dump(&reg, &mut buf).unwrap();
        let err = read(2, Cursor::new(buf)).unwrap_err();
        assert!(matches!(err, SimError::PreconditionViolation(_)));
    }

    #[test]
    fn skips_zero_amplitudes_in_dump() {
        let reg = QReg::new(3);
        let mut buf = Vec::new();
        dump(&reg, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn ket_expansion_skips_negligible_amplitudes() {
        let reg = QReg::new(2);
        let rendered = format_ket_expansion(&reg);
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.contains("|0x0>"));
    }
}
