use crate::error::PredictionError;
use anchor_lang::{prelude::*, Owner};

/// Deserializes a program account handed over as raw `AccountInfo`.
/// Returns `None` when nothing has been initialized at that address yet.
pub fn load_account<T: AccountDeserialize + Owner>(
    info: &AccountInfo,
    invalid: PredictionError,
) -> Result<Option<T>> {
    if info.data_is_empty() {
        return Ok(None);
    }

    require_keys_eq!(*info.owner, T::owner(), invalid);

    let data = info.try_borrow_data()?;
    let account = T::try_deserialize(&mut &data[..]).map_err(|_| invalid)?;

    Ok(Some(account))
}

/// Writes an account back in place, discriminator included.
pub fn store_account<T: AccountSerialize>(info: &AccountInfo, account: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    account.try_serialize(&mut writer)?;

    Ok(())
}
