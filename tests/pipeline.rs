use tts_3cx::{
    convert_for_telephony, decode, encode_pcm16_wav, resample_linear, AudioError, ErrorKind,
};

fn u16_at(b: &[u8], o: usize) -> u16 {
    u16::from_le_bytes([b[o], b[o + 1]])
}

fn u32_at(b: &[u8], o: usize) -> u32 {
    u32::from_le_bytes([b[o], b[o + 1], b[o + 2], b[o + 3]])
}

/// Deterministic values spread over [-1, 1].
fn noise(n: usize) -> Vec<f32> {
    let mut state = 0x2545_F491u32;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state as f64 / u32::MAX as f64 * 2.0 - 1.0) as f32
        })
        .collect()
}

#[test]
fn encode_then_decode_is_within_one_step() {
    let mut samples = noise(4_096);
    samples.extend_from_slice(&[-1.0, 1.0, 0.0, -0.5, 0.5, 1e-6, -1e-6]);

    let audio = decode(&encode_pcm16_wav(&samples, 16_000)).unwrap();
    assert_eq!(audio.sample_rate, 16_000);
    assert_eq!(audio.samples.len(), samples.len());
    for (a, b) in samples.iter().zip(&audio.samples) {
        assert!((a - b).abs() <= 1.0 / 32767.0, "{a} vs {b}");
    }
}

#[test]
fn resampler_identity_for_any_rate() {
    for rate in [8_000, 22_050, 24_000, 44_100, 48_000] {
        let x = noise(257);
        assert_eq!(resample_linear(x.clone(), rate, rate), x);
    }
}

#[test]
fn sine_at_24k_becomes_1600_bytes_at_8k() {
    let rate = 24_000u32;
    let sine: Vec<f32> = (0..2_400)
        .map(|i| (2.0 * std::f32::consts::PI * 1_000.0 * i as f32 / rate as f32).sin() * 0.8)
        .collect();
    let upstream = encode_pcm16_wav(&sine, rate);

    let out = convert_for_telephony(&upstream).unwrap();
    assert_eq!(&out[0..4], b"RIFF");
    assert_eq!(&out[8..12], b"WAVE");
    assert_eq!(u16_at(&out, 22), 1);
    assert_eq!(u32_at(&out, 24), 8_000);
    assert_eq!(u16_at(&out, 34), 16);
    assert_eq!(u32_at(&out, 40), 1_600);
    assert_eq!(out.len(), 44 + 1_600);

    // 24k → 8k is an exact 3:1 pick; two quantizations separate the ends
    let back = decode(&out).unwrap();
    for (i, s) in back.samples.iter().enumerate() {
        assert!((s - sine[i * 3]).abs() < 3.0 / 32767.0);
    }
}

#[test]
fn stereo_float_with_metadata_is_downmixed() {
    // LIST chunk before fmt, float stereo, left = 0.5, right = -0.25
    let mut data = Vec::new();
    for _ in 0..480 {
        data.extend_from_slice(&0.5f32.to_le_bytes());
        data.extend_from_slice(&(-0.25f32).to_le_bytes());
    }
    let mut body = Vec::new();
    body.extend_from_slice(b"LIST");
    body.extend_from_slice(&5u32.to_le_bytes());
    body.extend_from_slice(b"INFOx\0");
    body.extend_from_slice(b"fmt ");
    body.extend_from_slice(&16u32.to_le_bytes());
    body.extend_from_slice(&3u16.to_le_bytes());
    body.extend_from_slice(&2u16.to_le_bytes());
    body.extend_from_slice(&48_000u32.to_le_bytes());
    body.extend_from_slice(&(48_000u32 * 8).to_le_bytes());
    body.extend_from_slice(&8u16.to_le_bytes());
    body.extend_from_slice(&32u16.to_le_bytes());
    body.extend_from_slice(b"data");
    body.extend_from_slice(&(data.len() as u32).to_le_bytes());
    body.extend_from_slice(&data);

    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(4 + body.len() as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(&body);

    let out = convert_for_telephony(&wav).unwrap();
    assert_eq!(u32_at(&out, 40), 2 * 80);
    let back = decode(&out).unwrap();
    assert!(back.samples.iter().all(|s| (s - 0.125).abs() < 1.0 / 32767.0));
}

#[test]
fn non_wav_upstream_is_a_format_error() {
    let err = convert_for_telephony(b"ID3\x04\0\0\0\0\0\0mp3 bytes").unwrap_err();
    assert_eq!(err, AudioError::NotRiffWave);
    assert_eq!(err.kind(), ErrorKind::Format);

    let err = convert_for_telephony(br#"{"error":{"message":"bad key"}}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}
