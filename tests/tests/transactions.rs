//! Whole-transaction behavior: atomic rejection, ordering, settlement.

use isisnb_tests::prelude::*;

mod atomic_rejection {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("atomic_rejection")
            .operations_source(
                r#"
--# bad_batch
set /isis/instance[area-tag='core-1']
set /isis/instance[area-tag='core-1']/overload
set /isis/instance[area-tag='core-1']/area-address[.='49.0001.0000.0000.0001.00']
set /isis/instance[area-tag='core-1']/area-address[.='49.0002.0000.0000.0001.07']
set /interface[name='eth0']/isis/area-tag core-1

--# good_batch
set /isis/instance[area-tag='core-1']
set /isis/instance[area-tag='core-1']/area-address[.='49.0001.0000.0000.0001.00']
"#,
            )
            .unwrap()
            .step("bad_batch", |a| {
                a.rejected_with("nsel byte")
                    .areas(0)
                    .no_system_id()
                    .no_circuit("eth0")
                    .routing_events(0)
            })
            .step("good_batch", |a| {
                a.committed()
                    .areas(1)
                    .system_id("0000.0000.0001")
                    .routing_events(2)
            })
    }

    #[test]
    fn test_failed_validation_changes_nothing() {
        scenario().run().unwrap();
    }
}

mod spf_backoff {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("spf_backoff")
            .operations_source(
                r#"
--# enable_backoff
set /isis/instance[area-tag='core-1']
set /isis/instance[area-tag='core-1']/spf/ietf-backoff-delay/init-delay 100
set /isis/instance[area-tag='core-1']/spf/ietf-backoff-delay/hold-down 8000

--# disable_backoff
delete /isis/instance[area-tag='core-1']/spf/ietf-backoff-delay
"#,
            )
            .unwrap()
            .step("enable_backoff", |a| {
                a.committed()
                    .custom(|d| {
                        d.area("core-1")
                            .and_then(|area| area.spf_backoff)
                            .is_some_and(|b| {
                                b.init_delay == 100 && b.hold_down == 8000 && b.short_delay == 200
                            })
                    })
                    .shows(
                        " spf-delay-ietf init-delay 100 short-delay 200 long-delay 5000 \
                         holddown 8000 time-to-learn 500\n",
                    )
            })
            .step("disable_backoff", |a| {
                a.committed()
                    .custom(|d| d.area("core-1").is_some_and(|area| area.spf_backoff.is_none()))
            })
    }

    #[test]
    fn test_backoff_settles_as_one_unit() {
        scenario().run().unwrap();
    }
}

mod level_change {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("level_change")
            .operations_source(
                r#"
--# create
set /isis/instance[area-tag='core-1']
set /isis/instance[area-tag='core-1']/area-address[.='49.0001.0000.0000.0001.00']
set /interface[name='eth0']/isis/area-tag core-1

--# level_1_only
set /isis/instance[area-tag='core-1']/is-type level-1
"#,
            )
            .unwrap()
            .step("create", |a| a.committed())
            .step("level_1_only", |a| {
                a.committed()
                    .routing_events(1)
                    .custom(|d| {
                        d.circuit("eth0")
                            .is_some_and(|c| c.is_type == isisnb_core::IsType::Level1)
                    })
            })
    }

    #[test]
    fn test_single_level_area_overrides_circuits() {
        scenario().run().unwrap();
    }
}

mod running_config {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("running_config")
            .operations_source(
                r#"
--# configure
set /isis/instance[area-tag='core-1']
set /isis/instance[area-tag='core-1']/dynamic-hostname false
set /isis/instance[area-tag='core-1']/lsp/generation-interval/level-1 20
set /isis/instance[area-tag='core-1']/lsp/generation-interval/level-2 20
set /interface[name='eth0']/isis/area-tag core-1
set /interface[name='eth0']/isis/hello/padding false
set /interface[name='eth0']/isis/disable-three-way-handshake
"#,
            )
            .unwrap()
            .step("configure", |a| {
                a.committed()
                    .shows("router isis core-1\n no hostname dynamic\n lsp-gen-interval 20\n!\n")
                    .shows("interface eth0\n no isis hello padding\n no isis three-way-handshake\n!\n")
                    .custom(|d| {
                        d.circuit("eth0")
                            .is_some_and(|c| !c.hello_padding && !c.three_way_handshake)
                    })
            })
    }

    #[test]
    fn test_show_running() {
        scenario().run().unwrap();
    }
}

mod malformed_leaves {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("malformed_leaves")
            .operations_source(
                r#"
--# create
set /isis/instance[area-tag='core-1']

--# bad_level
set /isis/instance[area-tag='core-1']/overload
set /isis/instance[area-tag='core-1']/is-type bogus

--# bad_mtu
set /isis/instance[area-tag='core-1']/lsp/mtu 70000
"#,
            )
            .unwrap()
            .step("create", |a| a.committed())
            .step("bad_level", |a| {
                a.rejected_with("validation failed at")
                    .routing_events(0)
                    .hides("set-overload-bit")
                    .hides("is-type")
                    .custom(|d| {
                        d.area("core-1").is_some_and(|area| {
                            !area.overload && area.is_type == isisnb_core::IsType::Level1And2
                        })
                    })
            })
            .step("bad_mtu", |a| {
                a.rejected_with("validation failed at")
                    .hides("lsp-mtu")
                    .custom(|d| d.area("core-1").is_some_and(|area| area.lsp_mtu == 1497))
            })
    }

    #[test]
    fn test_malformed_values_reject_the_transaction() {
        scenario().run().unwrap();
    }
}

mod removed_leaves {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("removed_leaves")
            .operations_source(
                r#"
--# configure
set /isis/instance[area-tag='core-1']
set /isis/instance[area-tag='core-1']/is-type level-1
set /interface[name='eth0']/isis/area-tag core-1
set /interface[name='eth0']/isis/metric/level-1 40

--# back_to_both_levels
delete /isis/instance[area-tag='core-1']/is-type
set /isis/instance[area-tag='core-1']/overload

--# default_metric
delete /interface[name='eth0']/isis/metric/level-1
"#,
            )
            .unwrap()
            .step("configure", |a| {
                a.committed()
                    .shows(" is-type level-1\n")
                    .shows(" isis metric 40 level-1\n")
            })
            .step("back_to_both_levels", |a| {
                a.committed()
                    .hides(" is-type")
                    .shows(" set-overload-bit\n")
                    .custom(|d| {
                        d.area("core-1").is_some_and(|area| {
                            area.overload && area.is_type == isisnb_core::IsType::Level1And2
                        })
                    })
            })
            .step("default_metric", |a| {
                a.committed()
                    .hides("isis metric")
                    .custom(|d| d.circuit("eth0").is_some_and(|c| c.metric[0] == 10))
            })
    }

    #[test]
    fn test_removed_leaves_fall_back_to_defaults() {
        scenario().run().unwrap();
    }
}
