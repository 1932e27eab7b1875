use crate::features::hashing::{HashAlgorithm, hash_with_seed};
use crate::transforms::{Descriptor, OptionSchema, Options, Output, Transform, TransformError};

struct Digest(HashAlgorithm);

impl Transform for Digest {
    fn apply(&self, input: &[u8], options: &Options) -> Result<Output, TransformError> {
        let seed = if self.0.is_seeded() {
            options.int("seed")? as u64
        } else {
            0
        };
        Ok(Output::Text(hex::encode(hash_with_seed(input, self.0, seed))))
    }
}

/// One descriptor per hash algorithm; output is the lowercase hex digest.
pub(super) fn descriptors() -> Vec<Descriptor> {
    HashAlgorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let descriptor = Descriptor::new(
                algorithm.as_str(),
                algorithm.title(),
                "Hash",
                Digest(algorithm),
            )
            .with_aliases(algorithm.aliases());

            if algorithm.is_seeded() {
                descriptor.with_option(
                    "seed",
                    OptionSchema::Range {
                        min: 0,
                        max: u32::MAX as i64,
                        default: 0,
                    },
                )
            } else {
                descriptor
            }
        })
        .collect()
}
