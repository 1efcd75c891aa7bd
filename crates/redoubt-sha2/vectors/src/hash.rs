// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Full-hash vectors for every SHA-2 variant.
//!
//! The `abc`, 448-bit, 896-bit and one-million-`a` messages are the FIPS 180-4
//! example messages (NIST CSRC "Examples with Intermediate Values"). The
//! counter messages sit on either side of the padding boundaries: one byte
//! short of forcing an extra block, exactly forcing it, and the block edges.
//!
//! References:
//! [1] FIPS 180-4: Secure Hash Standard (SHS)
//!     https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
//! [2] NIST CAVP SHA-2 byte-oriented test vectors
//!     https://csrc.nist.gov/projects/cryptographic-algorithm-validation-program/secure-hashing

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use redoubt_sha2_core::Variant;

use crate::hex::{bytes_to_hex, hex_to_bytes};
use crate::message::Message;

/// 448-bit FIPS 180-4 example message (exactly 56 bytes)
pub const MSG_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

/// 896-bit FIPS 180-4 example message (exactly 112 bytes)
pub const MSG_896: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

/// One known-answer full-hash test
#[derive(Debug, Clone, Copy)]
pub struct HashVector {
    /// Variant under test
    pub variant: Variant,
    /// Short description
    pub name: &'static str,
    /// Input message
    pub message: Message,
    /// Expected digest (hex)
    pub digest: &'static str,
}

/// Known-answer vectors for all six variants
pub const SHA2_VECTORS: &[HashVector] = &[
    HashVector {
        variant: Variant::Sha224,
        name: "empty",
        message: Message::Literal(b""),
        digest: "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
    },
    HashVector {
        variant: Variant::Sha224,
        name: "abc",
        message: Message::Literal(b"abc"),
        digest: "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
    },
    HashVector {
        variant: Variant::Sha224,
        name: "448-bit",
        message: Message::Literal(MSG_448),
        digest: "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
    },
    HashVector {
        variant: Variant::Sha224,
        name: "896-bit",
        message: Message::Literal(MSG_896),
        digest: "c97ca9a559850ce97a04a96def6d99a9e0e0e2ab14e6b8df265fc0b3",
    },
    HashVector {
        variant: Variant::Sha224,
        name: "one million 'a'",
        message: Message::Repeat { byte: b'a', count: 1_000_000 },
        digest: "20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67",
    },
    HashVector {
        variant: Variant::Sha224,
        name: "counter 55",
        message: Message::Counter(55),
        digest: "8991dfba74284e04dc7581c7c3e4068ff6cb7a63733361429834bb56",
    },
    HashVector {
        variant: Variant::Sha224,
        name: "counter 56",
        message: Message::Counter(56),
        digest: "2b2cd637c16ad7290bb067ad7d8fd04e204fa43a84366afc7130f4ef",
    },
    HashVector {
        variant: Variant::Sha224,
        name: "counter 63",
        message: Message::Counter(63),
        digest: "049e8dd7eab3378ce9f823bfb569e5b270235d4b7f9623606971998f",
    },
    HashVector {
        variant: Variant::Sha224,
        name: "counter 64",
        message: Message::Counter(64),
        digest: "c37b88a3522dbf7ac30d1c68ea397ac11d4773571aed01ddab73531e",
    },
    HashVector {
        variant: Variant::Sha224,
        name: "counter 65",
        message: Message::Counter(65),
        digest: "114b5fd665736a96585c5d5837d35250aed73c725252cbf7f8b121f6",
    },
    HashVector {
        variant: Variant::Sha224,
        name: "counter 119",
        message: Message::Counter(119),
        digest: "762f18c0df65c3d0ea64126c8a6e51db4425e76d4d969ed0f83899be",
    },
    HashVector {
        variant: Variant::Sha224,
        name: "counter 120",
        message: Message::Counter(120),
        digest: "d022deb78772a77e8b91d68f90ca1f636e8fe047ae219434ced18eef",
    },
    HashVector {
        variant: Variant::Sha224,
        name: "counter 192",
        message: Message::Counter(192),
        digest: "f36432272b487ddfa019fa20b82cf8b69c9d6ed07b93ce5f55e99a1c",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "empty",
        message: Message::Literal(b""),
        digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "abc",
        message: Message::Literal(b"abc"),
        digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "448-bit",
        message: Message::Literal(MSG_448),
        digest: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "896-bit",
        message: Message::Literal(MSG_896),
        digest: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "one million 'a'",
        message: Message::Repeat { byte: b'a', count: 1_000_000 },
        digest: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "counter 55",
        message: Message::Counter(55),
        digest: "463eb28e72f82e0a96c0a4cc53690c571281131f672aa229e0d45ae59b598b59",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "counter 56",
        message: Message::Counter(56),
        digest: "da2ae4d6b36748f2a318f23e7ab1dfdf45acdc9d049bd80e59de82a60895f562",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "counter 63",
        message: Message::Counter(63),
        digest: "29af2686fd53374a36b0846694cc342177e428d1647515f078784d69cdb9e488",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "counter 64",
        message: Message::Counter(64),
        digest: "fdeab9acf3710362bd2658cdc9a29e8f9c757fcf9811603a8c447cd1d9151108",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "counter 65",
        message: Message::Counter(65),
        digest: "4bfd2c8b6f1eec7a2afeb48b934ee4b2694182027e6d0fc075074f2fabb31781",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "counter 119",
        message: Message::Counter(119),
        digest: "da18797ed7c3a777f0847f429724a2d8cd5138e6ed2895c3fa1a6d39d18f7ec6",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "counter 120",
        message: Message::Counter(120),
        digest: "f52b23db1fbb6ded89ef42a23ce0c8922c45f25c50b568a93bf1c075420bbb7c",
    },
    HashVector {
        variant: Variant::Sha256,
        name: "counter 192",
        message: Message::Counter(192),
        digest: "8b4a544837a1a0280fa8a7c82865c27a1064b3cc6281fda0753566b9bb104a87",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "empty",
        message: Message::Literal(b""),
        digest: "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "abc",
        message: Message::Literal(b"abc"),
        digest: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "448-bit",
        message: Message::Literal(MSG_448),
        digest: "3391fdddfc8dc7393707a65b1b4709397cf8b1d162af05abfe8f450de5f36bc6b0455a8520bc4e6f5fe95b1fe3c8452b",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "896-bit",
        message: Message::Literal(MSG_896),
        digest: "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "one million 'a'",
        message: Message::Repeat { byte: b'a', count: 1_000_000 },
        digest: "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b07b8b3dc38ecc4ebae97ddd87f3d8985",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "counter 119",
        message: Message::Counter(119),
        digest: "0c8d3031d85cefa23a09e13ce03623f0e648a030e43700c82aa1c8aa7e3ea9cecef3029a23815ad940cc39adb7747d2f",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "counter 120",
        message: Message::Counter(120),
        digest: "0577ad6090b2a39ffa1c4a25436f9e958890c55a5b23cf8cee8195a5984316d81d6cf0b5916c0ad8b1f512fb39826c6d",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "counter 127",
        message: Message::Counter(127),
        digest: "d5fcfe2fcf6b3ef375ede37c8123d9b78065fecc1d55197e2f7721e6e9a93d0ba4d7fd15f9b96dea2744df24141ba2ef",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "counter 128",
        message: Message::Counter(128),
        digest: "ca2385773319124534111a36d0581fc3f00815e907034b90cff9c3a861e126a741d5dfcff65a417b6d7296863ac0ec17",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "counter 129",
        message: Message::Counter(129),
        digest: "ef49ae5b9ad51433d00323528d81ea8d2e4d2b507dbd9f1cb84f952b66249a788b1c89fcdb77a0db9f1feb901d47fc73",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "counter 247",
        message: Message::Counter(247),
        digest: "bdc3e02d31db1eb7f04cd9fb8876aa9c7cb1852bd3bd62f56e062e216be648a34fd327b84e3b6339f44697470711f661",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "counter 248",
        message: Message::Counter(248),
        digest: "9135e6d4b1e2356c3de16a85e4af57243cf6861dfb6c53ca13d9481371aee285b75dccafc1a64499f1b2cbe4a3cd82c8",
    },
    HashVector {
        variant: Variant::Sha384,
        name: "counter 384",
        message: Message::Counter(384),
        digest: "1c30f9664ec795dc6a0b488c213f37d92d8fa7319116b71aaa909c675af5e006cef98643cf52be5de1a8cc0abd6d8de6",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "empty",
        message: Message::Literal(b""),
        digest: "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "abc",
        message: Message::Literal(b"abc"),
        digest: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "448-bit",
        message: Message::Literal(MSG_448),
        digest: "204a8fc6dda82f0a0ced7beb8e08a41657c16ef468b228a8279be331a703c33596fd15c13b1b07f9aa1d3bea57789ca031ad85c7a71dd70354ec631238ca3445",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "896-bit",
        message: Message::Literal(MSG_896),
        digest: "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "one million 'a'",
        message: Message::Repeat { byte: b'a', count: 1_000_000 },
        digest: "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973ebde0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "counter 119",
        message: Message::Counter(119),
        digest: "43e497279c2ce805903a33b54b746ea92d607f7c4807986c849823b81097a9099b5896ac7cc66df3a93edc8a91b6f3971d6c7f5688daf635737760bd080e27b3",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "counter 120",
        message: Message::Counter(120),
        digest: "9636708964c5ff6600510319e07bf3fcfcb1f4058fec278efb677964ba1e140c1632505452f802e99bcf09da3d456dc3868d149a0788a730e49d239ce7415145",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "counter 127",
        message: Message::Counter(127),
        digest: "eab89674feaa34e27aebeeff3c0a4d70070bb872d5e9f186cf1dbbdee517b6e35724d629ff025a5b07185e911ada7e3c8acf830aa0e4f71777bd2d44f504f7f0",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "counter 128",
        message: Message::Counter(128),
        digest: "1dffd5e3adb71d45d2245939665521ae001a317a03720a45732ba1900ca3b8351fc5c9b4ca513eba6f80bc7b1d1fdad4abd13491cb824d61b08d8c0e1561b3f7",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "counter 129",
        message: Message::Counter(129),
        digest: "1d9da57fbbdab09afb3506ab2d223d06109d65c1c8ad197f50138f714bc4c3f2fe5787922639c680acad1c651f955990425954ce2cba0c5cc83f2667d878eb0f",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "counter 247",
        message: Message::Counter(247),
        digest: "006086e61959b1d66c72e754427ead5e1d6c02d8409f5c32b2f5ae448f54682b504a1abc0346ccf39bf66a8c7b69081e886b47a7d0b02291462391c95351ee40",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "counter 248",
        message: Message::Counter(248),
        digest: "3828b2ed548cfd0b74bb34a1feae030e267222198d7e387e7fe3ed503905a25d4c3301a9a47e78372f685b05847062476c507708cdd75580adb579e4cdc79aa0",
    },
    HashVector {
        variant: Variant::Sha512,
        name: "counter 384",
        message: Message::Counter(384),
        digest: "41a8f703f0d02d49e34c9ae49c634deceb9beb511a02d73bada267dd7def4602cc1ebb0eaa55e21483bbf6772281ad477f22c600febefe83eb6861b04287f370",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "empty",
        message: Message::Literal(b""),
        digest: "6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "abc",
        message: Message::Literal(b"abc"),
        digest: "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "448-bit",
        message: Message::Literal(MSG_448),
        digest: "e5302d6d54bb242275d1e7622d68df6eb02dedd13f564c13dbda2174",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "896-bit",
        message: Message::Literal(MSG_896),
        digest: "23fec5bb94d60b23308192640b0c453335d664734fe40e7268674af9",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "one million 'a'",
        message: Message::Repeat { byte: b'a', count: 1_000_000 },
        digest: "37ab331d76f0d36de422bd0edeb22a28accd487b7a8453ae965dd287",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "counter 119",
        message: Message::Counter(119),
        digest: "091688fd3b855964a303eee8f09f3a04b211b8a31b1729451a0458a6",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "counter 120",
        message: Message::Counter(120),
        digest: "3055cc455c76a920206971189dade9a78a53e2455c12865c4ed36ce3",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "counter 127",
        message: Message::Counter(127),
        digest: "29d2c4166a36e07b2dcd3a7c988dcb14776dc187040f6a733162efb7",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "counter 128",
        message: Message::Counter(128),
        digest: "49a64b72a88a3c93432b6e4c59a1b4908403f70e46e13bf7494fbe88",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "counter 129",
        message: Message::Counter(129),
        digest: "aa05964c59a40bb5140f3f1b9ca03c3eee0a1044bbd3fe84e5936877",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "counter 247",
        message: Message::Counter(247),
        digest: "dc5172956e9a8c86e4cc6f2b13d8bc600bcafdc673842aea711589d1",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "counter 248",
        message: Message::Counter(248),
        digest: "2b762dad2b6591f4e60becfc43214ef34d5d435a3df85e091b30a47d",
    },
    HashVector {
        variant: Variant::Sha512_224,
        name: "counter 384",
        message: Message::Counter(384),
        digest: "7e25cddf035be6a880ca23897fbca1c044f75f937b38c9660aa0aeb2",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "empty",
        message: Message::Literal(b""),
        digest: "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "abc",
        message: Message::Literal(b"abc"),
        digest: "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "448-bit",
        message: Message::Literal(MSG_448),
        digest: "bde8e1f9f19bb9fd3406c90ec6bc47bd36d8ada9f11880dbc8a22a7078b6a461",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "896-bit",
        message: Message::Literal(MSG_896),
        digest: "3928e184fb8690f840da3988121d31be65cb9d3ef83ee6146feac861e19b563a",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "one million 'a'",
        message: Message::Repeat { byte: b'a', count: 1_000_000 },
        digest: "9a59a052930187a97038cae692f30708aa6491923ef5194394dc68d56c74fb21",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "counter 119",
        message: Message::Counter(119),
        digest: "6fdcc1a442cc8391d7dd5a0db6601efaee9a4954056c78a64038c36bf7acb368",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "counter 120",
        message: Message::Counter(120),
        digest: "be74a90abbc2ea03ff56dedae4eda154ba6cf24d73a515903356283b653f5109",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "counter 127",
        message: Message::Counter(127),
        digest: "c26bc7e9315e62ab0dc6aeb577724d07c09b0c6fdfc0a9f08d8548047c032248",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "counter 128",
        message: Message::Counter(128),
        digest: "2ff11194b2aec1f943cb5f130ba647c151334068083194d7281a55d607ae255f",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "counter 129",
        message: Message::Counter(129),
        digest: "c4a3bbf841ed2a289e5109fb392229c80db61c72fd92079b5a4f0441f095a111",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "counter 247",
        message: Message::Counter(247),
        digest: "d8d16c8ea78d7f3e047016273b4b145d82adefa1017b07d25b36ceacf5266b7c",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "counter 248",
        message: Message::Counter(248),
        digest: "5ae8021e842ab071a0918438cfa7d1522581994d421838b61f53331e5832137c",
    },
    HashVector {
        variant: Variant::Sha512_256,
        name: "counter 384",
        message: Message::Counter(384),
        digest: "e4a04c61c622d6070ffc7d70187f8b1772eb3be16fac35b52ddeedf9f0e379da",
    },
];

/// Vectors of a single variant
pub fn vectors_for(variant: Variant) -> impl Iterator<Item = &'static HashVector> {
    SHA2_VECTORS.iter().filter(move |v| v.variant == variant)
}

/// Run every vector through `hash` and report all mismatches.
///
/// `hash(variant, message)` must return the full digest.
pub fn run_hash_vectors<F>(mut hash: F) -> Result<(), String>
where
    F: FnMut(Variant, &[u8]) -> Vec<u8>,
{
    let mut failures = Vec::new();

    for vector in SHA2_VECTORS {
        let message = vector.message.to_bytes();
        let computed = hash(vector.variant, &message);

        let Some(expected) = hex_to_bytes(vector.digest) else {
            failures.push(format!(
                "{} ({}): malformed expected digest",
                vector.variant, vector.name
            ));
            continue;
        };

        if computed != expected {
            failures.push(format!(
                "{} ({}): digest mismatch\n  expected: {}\n  got:      {}",
                vector.variant,
                vector.name,
                vector.digest,
                bytes_to_hex(&computed)
            ));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.join("\n"))
    }
}
