//! Password settlement integration tests.

use isisnb_core::{Password, PasswordType, SnpAuth};
use isisnb_tests::prelude::*;

mod area_password {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("area_password")
            .operations_source(
                r#"
--# create_area
set /isis/instance[area-tag='core-1']

--# set_password
set /isis/instance[area-tag='core-1']/area-password/password-type clear
set /isis/instance[area-tag='core-1']/area-password/password secret1
set /isis/instance[area-tag='core-1']/area-password/authenticate-snp send-only

--# change_type
set /isis/instance[area-tag='core-1']/area-password/password-type md5

--# remove_password
delete /isis/instance[area-tag='core-1']/area-password
"#,
            )
            .unwrap()
            .step("create_area", |a| a.committed())
            .step("set_password", |a| {
                a.committed()
                    .custom(|d| {
                        d.area("core-1").and_then(|area| area.area_password.clone())
                            == Some(Password::new(
                                PasswordType::ClearText,
                                "secret1",
                                SnpAuth::SendOnly,
                            ))
                    })
                    .shows(" area-password clear secret1 authenticate snp send-only\n")
            })
            .step("change_type", |a| {
                a.committed().custom(|d| {
                    d.area("core-1")
                        .and_then(|area| area.area_password.as_ref())
                        .is_some_and(|p| p.kind == PasswordType::HmacMd5 && p.secret == "secret1")
                })
            })
            .step("remove_password", |a| {
                a.committed()
                    .custom(|d| d.area("core-1").is_some_and(|area| area.area_password.is_none()))
                    .hides("area-password")
            })
    }

    #[test]
    fn test_password_settles_once_per_transaction() {
        scenario().run().unwrap();
    }
}

mod domain_password {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("domain_password")
            .operations_source(
                r#"
--# create_area
set /isis/instance[area-tag='core-1']
set /isis/instance[area-tag='core-1']/domain-password/password-type md5
set /isis/instance[area-tag='core-1']/domain-password/password s3cret

--# too_long
set /isis/instance[area-tag='core-1']/domain-password/password xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx
"#,
            )
            .unwrap()
            .step("create_area", |a| {
                a.committed()
                    .custom(|d| {
                        d.area("core-1").is_some_and(|area| {
                            area.area_password.is_none()
                                && area.domain_password.as_ref().map(|p| p.snp_auth)
                                    == Some(SnpAuth::None)
                        })
                    })
                    .shows(" domain-password md5 s3cret\n")
            })
            .step("too_long", |a| a.rejected_with("password must be 1 to 254 characters long"))
    }

    #[test]
    fn test_domain_password_and_length_limit() {
        scenario().run().unwrap();
    }
}

mod circuit_password {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("circuit_password")
            .operations_source(
                r#"
--# enable
set /isis/instance[area-tag='core-1']
set /interface[name='eth0']/isis/area-tag core-1
set /interface[name='eth0']/isis/password/password-type clear
set /interface[name='eth0']/isis/password/password hello

--# remove
delete /interface[name='eth0']/isis/password
"#,
            )
            .unwrap()
            .step("enable", |a| {
                a.committed()
                    .custom(|d| {
                        d.circuit("eth0")
                            .and_then(|c| c.password.as_ref())
                            .is_some_and(|p| p.secret == "hello")
                    })
                    .shows(" isis password clear hello\n")
            })
            .step("remove", |a| {
                a.committed()
                    .custom(|d| d.circuit("eth0").is_some_and(|c| c.password.is_none()))
            })
    }

    #[test]
    fn test_circuit_password() {
        scenario().run().unwrap();
    }
}

mod incomplete_password {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("incomplete_password")
            .operations_source(
                r#"
--# create_area
set /isis/instance[area-tag='core-1']

--# type_only
set /isis/instance[area-tag='core-1']/area-password/password-type md5

--# complete
set /isis/instance[area-tag='core-1']/area-password/password-type md5
set /isis/instance[area-tag='core-1']/area-password/password secret1

--# drop_secret
delete /isis/instance[area-tag='core-1']/area-password/password
"#,
            )
            .unwrap()
            .step("create_area", |a| a.committed())
            .step("type_only", |a| {
                a.rejected_with("password is mandatory")
                    .hides("area-password")
                    .custom(|d| d.area("core-1").is_some_and(|area| area.area_password.is_none()))
            })
            .step("complete", |a| {
                a.committed().custom(|d| {
                    d.area("core-1").and_then(|area| area.area_password.clone())
                        == Some(Password::new(PasswordType::HmacMd5, "secret1", SnpAuth::None))
                })
            })
            .step("drop_secret", |a| {
                a.rejected_with("password is mandatory")
                    .shows(" area-password md5 secret1\n")
                    .custom(|d| d.area("core-1").is_some_and(|area| area.area_password.is_some()))
            })
    }

    #[test]
    fn test_password_needs_secret_and_type() {
        scenario().run().unwrap();
    }
}
