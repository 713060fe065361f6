mod common;

use common::{read_jwk, TestResult, PUBLIC_HEX, SECRET_HEX};
use ed25519_jwk::{codec, Ed25519Jwk, NoBase64UrlString};
use serde_json::Value;

#[test]
fn rfc8037_private_key() -> TestResult {
    let jwk = Ed25519Jwk::from_json(read_jwk("ed25519")?)?;
    let raw = codec::decode(&jwk)?;

    assert_eq!(raw.len(), 64);
    assert_eq!(hex::encode(raw.as_bytes()), format!("{SECRET_HEX}{PUBLIC_HEX}"));
    Ok(())
}

#[test]
fn rfc8037_public_key() -> TestResult {
    let jwk = Ed25519Jwk::from_json(read_jwk("ed25519.pub")?)?;
    let raw = jwk.to_raw()?;

    assert!(raw.is_public_only());
    assert_eq!(hex::encode(raw.as_bytes()), PUBLIC_HEX);
    Ok(())
}

#[test]
fn private_key_roundtrip() -> TestResult {
    let expected: Value = serde_json::from_str(&read_jwk("ed25519")?)?;

    let raw = hex::decode(format!("{SECRET_HEX}{PUBLIC_HEX}"))?;
    let jwk = codec::encode(&raw);
    let json: Value = serde_json::from_str(&jwk.to_json()?)?;

    assert_eq!(json["kty"], expected["kty"]);
    assert_eq!(json["crv"], expected["crv"]);
    assert_eq!(json["d"], expected["d"]);
    assert_eq!(json["x"], expected["x"]);
    assert_eq!(json["use"], "sig");
    assert_eq!(json["kid"], "");

    assert_eq!(codec::decode(&jwk)?.as_bytes(), raw);
    Ok(())
}

#[test]
fn roundtrip_many_keys() -> TestResult {
    for seed in 0u8..=255 {
        let raw: Vec<u8> = (0..64u8)
            .map(|i| seed.wrapping_mul(31).wrapping_add(i.wrapping_mul(seed | 1)))
            .collect();

        let private = codec::encode(&raw);
        assert_eq!(codec::decode(&private)?.as_bytes(), raw, "seed {seed}");

        let public = codec::encode(&raw[32..]);
        assert_eq!(public.d(), "");
        assert_eq!(codec::decode(&public)?.as_bytes(), &raw[32..], "seed {seed}");
    }
    Ok(())
}

#[test]
fn zero_key_is_all_a() -> TestResult {
    let jwk = codec::encode(&[0; 64]);
    let zeros = "A".repeat(43);

    assert_eq!(
        jwk.to_json()?,
        format!(r#"{{"kty":"OKP","crv":"Ed25519","x":"{zeros}","d":"{zeros}","use":"sig","kid":""}}"#)
    );
    Ok(())
}

#[test]
fn public_only_jwk_has_no_private_prefix() -> TestResult {
    let jwk = Ed25519Jwk::from_json(
        r#"{"kty":"OKP","crv":"Ed25519","x":"AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE","d":""}"#,
    )?;

    assert_eq!(jwk.to_raw()?.as_bytes(), [1u8; 32]);
    Ok(())
}

#[test]
fn kid_is_ignored() -> TestResult {
    let with_kid = Ed25519Jwk::from_json(
        r#"{"kty":"OKP","crv":"Ed25519","x":"AQ","d":"Ag","kid":"some-key","use":"enc"}"#,
    )?;

    assert_eq!(with_kid.to_raw()?.as_bytes(), [2u8, 1]);
    Ok(())
}

#[test]
fn malformed_base64_is_reported() -> TestResult {
    let padded = Ed25519Jwk::from_json(r#"{"x":"AQ==","d":""}"#)?;
    assert_eq!(padded.to_raw(), Err(NoBase64UrlString { field: "x" }));

    let standard_alphabet = Ed25519Jwk::from_json(r#"{"x":"AQ","d":"+/8"}"#)?;
    assert_eq!(standard_alphabet.to_raw(), Err(NoBase64UrlString { field: "d" }));
    Ok(())
}
