use crate::downmix::ChannelLayout;
use crate::wav::WavInfo;

/// Samples per emitted line, 16 bytes of literals.
pub const SAMPLES_PER_LINE: usize = 8;

const INDENT: &str = "    ";

/// Renders mono samples as comma separated hex byte literals, low byte
/// first. Line breaks are cosmetic, the byte sequence read back from
/// the literals is exactly the little-endian encoding of the samples.
pub fn render_array_body(samples: &[i16]) -> String {
    // "0xAB, " is 6 chars per byte, 2 bytes per sample
    let mut body = String::with_capacity(samples.len() * 12 + INDENT.len());
    body.push_str(INDENT);
    for (i, sample) in samples.iter().enumerate() {
        let [lo, hi] = sample.to_le_bytes();
        body.push_str(&format!("0x{lo:02X}, 0x{hi:02X}, "));
        if (i + 1) % SAMPLES_PER_LINE == 0 {
            body.push('\n');
            body.push_str(INDENT);
        }
    }
    body.trim_end_matches([',', '\n', ' ']).to_string()
}

/// Trailing comment block describing the source stream. Informational
/// only, never parsed back.
pub fn render_metadata_comment(
    info: &WavInfo,
    layout: ChannelLayout,
    sample_count: usize,
) -> String {
    format!(
        "// WAV file parameters:\n\
         // - Sample rate: {} Hz\n\
         // - Channels: {} ({})\n\
         // - Duration: {:.2} seconds\n\
         // - Total samples: {}",
        info.sample_rate,
        info.channel_count,
        layout.label(),
        info.duration_seconds(),
        sample_count,
    )
}

/// The complete generated translation unit: provenance comment,
/// includes, the PROGMEM array, a sizeof-derived size constant and the
/// metadata comment. The size constant is structural so it stays
/// correct if the array is ever edited by hand.
pub fn render_translation_unit(
    ident: &str,
    source_name: &str,
    info: &WavInfo,
    layout: ChannelLayout,
    samples: &[i16],
) -> String {
    format!(
        "// Auto-generated from {source_name}\n\
         #include <stddef.h>\n\
         #include <cstdint>\n\
         #include <avr/pgmspace.h>\n\
         \n\
         const uint8_t {ident}_data[] PROGMEM = {{\n\
         {body}\n\
         }};\n\
         const size_t {ident}_size = sizeof({ident}_data);\n\
         \n\
         {metadata}",
        body = render_array_body(samples),
        metadata = render_metadata_comment(info, layout, samples.len()),
    )
}
