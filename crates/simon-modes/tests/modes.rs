use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use simon_core::{encrypt_block, expand_key, Block, SimonKey};
use simon_modes::{CipherConfig, CipherContext, Mode, ModeState, SimonCipher};

const STREAMING: [Mode; 3] = [Mode::Ctr, Mode::Cfb, Mode::Ofb];
const CHAINED: [Mode; 4] = [Mode::Cbc, Mode::Ctr, Mode::Cfb, Mode::Ofb];

fn random_block(rng: &mut impl RngCore) -> Block {
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    block
}

fn context(key: &Block, iv: &Block, mode: Mode) -> CipherContext {
    CipherContext::initialize(CipherConfig::default(), key, iv, mode).expect("valid config")
}

#[test]
fn published_vector_through_ecb() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let pt = hex::decode("2074726176656c6c6572732064657363").unwrap();
    let mut ctx =
        CipherContext::initialize(CipherConfig::default(), &key, &[], Mode::Ecb).unwrap();
    let ct = ctx.encrypt(&pt).unwrap();
    assert_eq!(hex::encode(&ct), "bc0b4ef82a83aa653ffe541e1e1b6849");
}

#[test]
fn round_trip_all_modes_random() {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    for mode in Mode::ALL {
        for _ in 0..20 {
            let key = random_block(&mut rng);
            let iv = random_block(&mut rng);
            let blocks = rng.gen_range(0..8);
            let len = if mode.requires_alignment() {
                blocks * 16
            } else {
                blocks * 16 + rng.gen_range(0..16)
            };
            let mut pt = vec![0u8; len];
            rng.fill_bytes(&mut pt);

            let ct = context(&key, &iv, mode).encrypt(&pt).unwrap();
            assert_eq!(ct.len(), pt.len());
            let back = context(&key, &iv, mode).decrypt(&ct).unwrap();
            assert_eq!(back, pt, "{mode} len {len}");
        }
    }
}

#[test]
fn zero_length_is_a_no_op() {
    let key = [7u8; 16];
    let iv = [9u8; 16];
    for mode in Mode::ALL {
        let mut ctx = context(&key, &iv, mode);
        let before = ctx.state().clone();
        assert!(ctx.encrypt(&[]).unwrap().is_empty());
        assert!(ctx.decrypt(&[]).unwrap().is_empty());
        assert_eq!(ctx.state(), &before, "{mode}");
    }
}

#[test]
fn block_modes_reject_unaligned_input() {
    let key = [7u8; 16];
    let iv = [9u8; 16];
    for mode in [Mode::Ecb, Mode::Cbc] {
        for len in [1usize, 15, 17, 33] {
            let err = context(&key, &iv, mode).encrypt(&vec![0u8; len]).unwrap_err();
            assert_eq!((err.mode, err.len, err.block_size), (mode, len, 16));
            assert!(context(&key, &iv, mode).decrypt(&vec![0u8; len]).is_err());
        }
    }
}

#[test]
fn streaming_modes_accept_any_split() {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let key = random_block(&mut rng);
    let iv = random_block(&mut rng);
    let mut pt = vec![0u8; 100];
    rng.fill_bytes(&mut pt);

    for mode in STREAMING {
        let whole = context(&key, &iv, mode).encrypt(&pt).unwrap();
        for _ in 0..10 {
            let mut ctx = context(&key, &iv, mode);
            let mut out = Vec::with_capacity(pt.len());
            let mut rest = &pt[..];
            while !rest.is_empty() {
                let take = rng.gen_range(1..=rest.len().min(23));
                let (chunk, tail) = rest.split_at(take);
                out.extend(ctx.encrypt(chunk).unwrap());
                rest = tail;
            }
            assert_eq!(out, whole, "{mode}");
        }
    }
}

#[test]
fn iv_bit_flip_changes_every_block() {
    let key = [0x3cu8; 16];
    let iv = [0u8; 16];
    let pt = [0u8; 16 * 6];
    for mode in CHAINED {
        let base = context(&key, &iv, mode).encrypt(&pt).unwrap();
        for bit in [0usize, 63, 127] {
            let mut flipped = iv;
            flipped[bit / 8] ^= 1 << (bit % 8);
            let other = context(&key, &flipped, mode).encrypt(&pt).unwrap();
            for (i, (a, b)) in base.chunks(16).zip(other.chunks(16)).enumerate() {
                assert_ne!(a, b, "{mode} bit {bit} block {i}");
            }
        }
    }
}

#[test]
fn ctr_keystream_is_encrypted_counter_sequence() {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let key = random_block(&mut rng);
    let start = random_block(&mut rng);
    let mut pt = vec![0u8; 16 * 64];
    rng.fill_bytes(&mut pt);

    let ct = context(&key, &start, Mode::Ctr).encrypt(&pt).unwrap();
    let round_keys = expand_key(&SimonKey::from(key));
    let mut seen = std::collections::HashSet::new();
    let mut counter = u128::from_be_bytes(start);
    for (p, c) in pt.chunks(16).zip(ct.chunks(16)) {
        let keystream: Vec<u8> = p.iter().zip(c).map(|(a, b)| a ^ b).collect();
        let expected = encrypt_block(&counter.to_be_bytes(), &round_keys);
        assert_eq!(keystream, expected);
        assert!(seen.insert(expected), "keystream block repeated");
        counter = counter.wrapping_add(1);
    }
}

#[test]
fn feedback_modes_share_first_keystream_block() {
    let key = [0x10u8; 16];
    let iv = [0x20u8; 16];
    let pt = [0x30u8; 16];
    let ctr = context(&key, &iv, Mode::Ctr).encrypt(&pt).unwrap();
    let cfb = context(&key, &iv, Mode::Cfb).encrypt(&pt).unwrap();
    let ofb = context(&key, &iv, Mode::Ofb).encrypt(&pt).unwrap();
    assert_eq!(ctr, cfb);
    assert_eq!(cfb, ofb);
}

#[test]
fn shared_cipher_with_independent_sessions() {
    let cipher = SimonCipher::new(CipherConfig::default(), &[0x44u8; 16]).unwrap();
    let expected = context(&[0x44u8; 16], &[0u8; 16], Mode::Ofb)
        .encrypt(&[0u8; 64])
        .unwrap();

    let cipher = &cipher;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    let mut state = ModeState::new(Mode::Ofb, &[0u8; 16]).unwrap();
                    let mut buf = [0u8; 64];
                    state.encrypt(cipher, &mut buf).unwrap();
                    buf.to_vec()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn suspended_session_resumes_with_fresh_key_expansion() {
    let key = [0x5au8; 16];
    let iv = [0xa5u8; 16];
    let pt: Vec<u8> = (0..=200u8).collect();
    for mode in Mode::ALL {
        let len = if mode.requires_alignment() { 192 } else { pt.len() };
        let split = if mode.requires_alignment() { 64 } else { 77 };
        let whole = context(&key, &iv, mode).encrypt(&pt[..len]).unwrap();

        let mut ctx = context(&key, &iv, mode);
        let mut out = ctx.encrypt(&pt[..split]).unwrap();
        let snapshot = ctx.state().to_bytes().unwrap();
        drop(ctx);

        let cipher = SimonCipher::new(CipherConfig::default(), &key).unwrap();
        let state = ModeState::from_bytes(&snapshot).unwrap();
        let mut resumed = CipherContext::from_parts(cipher, state);
        out.extend(resumed.encrypt(&pt[split..len]).unwrap());
        assert_eq!(out, whole, "{mode}");
    }
}
