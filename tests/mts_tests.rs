use synthtuner::mts::{offset_to_u14, SysexMessage, TuningRequest, MESSAGE_LEN};

const HEADER: [u8; 8] = [0xF0, 0x7F, 0x7F, 0x08, 0x09, 0x7F, 0x7F, 0x7F];

fn encode(offsets: [f64; 12]) -> SysexMessage {
    SysexMessage::octave_tuning(&TuningRequest::new(offsets))
}

#[test]
fn test_zero_tuning_encodes_center_value() {
    let msg = encode([0.0; 12]);

    assert_eq!(&msg.as_bytes()[..8], &HEADER);
    for pair in msg.data().chunks_exact(2) {
        assert_eq!(pair, &[0x40, 0x00]);
    }
    assert_eq!(msg.note_values(), [8192; 12]);
}

#[test]
fn test_extremes() {
    let mut offsets = [0.0; 12];
    offsets[0] = 1.0;
    offsets[11] = -1.0;
    let msg = encode(offsets);

    assert_eq!(&msg.data()[0..2], &[0x7F, 0x7F]);
    assert_eq!(&msg.data()[22..24], &[0x00, 0x00]);
}

#[test]
fn test_rounds_to_nearest() {
    // 0.5 -> 12287.25, -0.5 -> 4095.75
    assert_eq!(offset_to_u14(0.5), 12287);
    assert_eq!(offset_to_u14(-0.5), 4096);

    let mut offsets = [0.0; 12];
    offsets[3] = 0.5;
    offsets[4] = -0.5;
    let msg = encode(offsets);
    assert_eq!(&msg.data()[6..10], &[0x5F, 0x7F, 0x20, 0x00]);
}

#[test]
fn test_framing_is_fixed() {
    for offsets in [[0.0; 12], [1.0; 12], [-1.0; 12], [0.123; 12]] {
        let msg = encode(offsets);
        assert_eq!(msg.as_bytes().len(), MESSAGE_LEN);
        assert_eq!(MESSAGE_LEN, 33);
        assert_eq!(msg.as_bytes()[0], 0xF0);
        assert_eq!(msg.as_bytes()[32], 0xF7);
        assert!(msg.data().iter().all(|b| *b <= 0x7F));
    }
}

#[test]
fn test_notes_keep_input_order() {
    let offsets = [
        -1.0, -0.8, -0.6, -0.4, -0.2, 0.0, 0.1, 0.3, 0.5, 0.7, 0.9, 1.0,
    ];
    let values = encode(offsets).note_values();

    assert!(values.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(values[0], 0);
    assert_eq!(values[11], 16383);
}

#[test]
fn test_decoded_values_stay_within_quantization_error() {
    let offsets = [
        -0.97, -0.5, -0.333, -0.01, 0.0, 0.02, 0.25, 0.3, 0.5, 0.66, 0.75, 0.999,
    ];
    let values = encode(offsets).note_values();

    for (original, value) in offsets.iter().zip(values.iter()) {
        let decoded = f64::from(*value) / 16383.0 * 2.0 - 1.0;
        assert!(
            (decoded - original).abs() <= 1.0 / 16383.0,
            "{} decoded as {}",
            original,
            decoded
        );
    }
}

#[test]
fn test_out_of_range_offsets_are_not_clamped() {
    // 2.0 -> 24575, -2.0 -> -8192; both wrap through the 7-bit masks
    assert_eq!(offset_to_u14(2.0), 24575);
    assert_eq!(offset_to_u14(-2.0), -8192);

    let mut offsets = [0.0; 12];
    offsets[0] = 2.0;
    offsets[1] = -2.0;
    let msg = encode(offsets);
    assert_eq!(&msg.data()[0..4], &[0x3F, 0x7F, 0x40, 0x00]);
    assert_ne!(msg, encode([1.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]));
}

#[test]
fn test_tuning_request_requires_twelve_values() {
    let values = vec![0.0; 12];
    assert!(TuningRequest::try_from(values.as_slice()).is_ok());

    let short = vec![0.0; 10];
    assert_eq!(TuningRequest::try_from(short.as_slice()), Err(10));
}

#[test]
fn test_display_as_hex() {
    let text = encode([0.0; 12]).to_string();
    assert!(text.starts_with("F0 7F 7F 08 09 7F 7F 7F 40 00"));
    assert!(text.ends_with("40 00 F7"));
}
