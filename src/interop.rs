//! Conversions to the `ordinals` crate types.

use std::str::FromStr;

use ordinals::Rune;

use crate::{OrdError, RuneId, SpacedRune};

impl TryFrom<RuneId> for ordinals::RuneId {
    type Error = OrdError;

    fn try_from(id: RuneId) -> Result<Self, Self::Error> {
        let id = RuneId::new(id.block, id.tx)?;

        Ok(Self {
            block: id.block,
            tx: id.tx as u32,
        })
    }
}

impl TryFrom<ordinals::RuneId> for RuneId {
    type Error = OrdError;

    fn try_from(id: ordinals::RuneId) -> Result<Self, Self::Error> {
        Ok(Self::new(id.block, u64::from(id.tx))?)
    }
}

impl TryFrom<&SpacedRune> for ordinals::SpacedRune {
    type Error = OrdError;

    fn try_from(spaced: &SpacedRune) -> Result<Self, Self::Error> {
        let rune =
            Rune::from_str(&spaced.rune).map_err(|err| OrdError::Interop(err.to_string()))?;

        Ok(Self {
            rune,
            spacers: spaced.spacers,
        })
    }
}

impl From<ordinals::SpacedRune> for SpacedRune {
    fn from(spaced: ordinals::SpacedRune) -> Self {
        Self {
            rune: spaced.rune.to_string(),
            spacers: spaced.spacers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_match_ordinals_spaced_rune() {
        for name in ["A•B", "UNCOMMON•GOODS", "Z•ZZ•ZZZ•Z", "ABCDEF"] {
            let ours = name.parse::<SpacedRune>().unwrap();
            let theirs = ordinals::SpacedRune::from_str(name).unwrap();

            assert_eq!(ordinals::SpacedRune::try_from(&ours).unwrap(), theirs);
            assert_eq!(SpacedRune::from(theirs), ours);
        }
    }

    #[test]
    fn test_should_convert_rune_id() {
        let id = RuneId::new(840_000, 1).unwrap();
        let converted = ordinals::RuneId::try_from(id).unwrap();

        assert_eq!(converted.block, 840_000);
        assert_eq!(converted.tx, 1);
        assert_eq!(RuneId::try_from(converted).unwrap(), id);
        assert!(RuneId::try_from(ordinals::RuneId { block: 1, tx: 70_000 }).is_err());
        assert!(ordinals::RuneId::try_from(RuneId { block: 1, tx: 70_000 }).is_err());
    }
}
