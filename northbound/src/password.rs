//! Password containers.
//!
//! A password is three sibling leaves: the secret, its type and the
//! SNP policy. The leaves apply as no-ops; the container reads all of
//! them once every change beneath it was applied.

use isisnb_core::{Password, PasswordType, SnpAuth};
use isisnb_transaction::NbResult;
use isisnb_tree::DataNode;

/// Read a complete password from its container.
///
/// Circuit passwords have no SNP policy leaf and read as `none`.
pub(crate) fn read_password(dnode: &DataNode<'_>) -> NbResult<Password> {
    let secret = dnode.get_string("./password")?;
    let kind = dnode.get_enum::<PasswordType>("./password-type")?;
    let snp_auth = if dnode.exists("./authenticate-snp") {
        dnode.get_enum::<SnpAuth>("./authenticate-snp")?
    } else {
        SnpAuth::None
    };
    Ok(Password::new(kind, secret, snp_auth))
}
