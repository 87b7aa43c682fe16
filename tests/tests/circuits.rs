//! Circuit lifecycle integration tests.

use isisnb_tests::prelude::*;

const AREA: &str = r#"
--# create_area
set /isis/instance[area-tag='core-1']
set /isis/instance[area-tag='core-1']/area-address[.='49.0001.1921.6800.1001.00']
"#;

fn script(steps: &str) -> String {
    format!("{}\n{}", AREA, steps)
}

mod teardown_from_up {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("teardown_from_up")
            .operations_source(&script(
                r#"
--# enable
set /interface[name='eth0']/isis/area-tag core-1
set /interface[name='eth0']/isis/ipv4-routing

--# link_up
if-up eth0

--# disable
delete /interface[name='eth0']/isis
"#,
            ))
            .unwrap()
            .step("create_area", |a| a.committed())
            .step("enable", |a| {
                a.committed()
                    .circuit_state("eth0", CircuitState::Configured)
                    .shows("interface eth0\n ip router isis core-1\n!\n")
            })
            .step("link_up", |a| a.circuit_state("eth0", CircuitState::Up))
            .step("disable", |a| {
                a.committed().no_circuit("eth0").custom(|d| {
                    d.area("core-1").is_some_and(|area| area.circuits.is_empty())
                })
            })
    }

    #[test]
    fn test_up_circuit_goes_down_then_disabled() {
        scenario().run().unwrap();
    }
}

mod initializing {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("initializing")
            .operations_source(&script(
                r#"
--# link_up_first
if-up eth1

--# enable
set /interface[name='eth1']/isis/area-tag core-1

--# link_down
if-down eth1

--# destroy_area
delete /isis/instance[area-tag='core-1']
"#,
            ))
            .unwrap()
            .step("create_area", |a| a.committed())
            .step("link_up_first", |a| a.circuit_state("eth1", CircuitState::Initializing))
            .step("enable", |a| a.committed().circuit_state("eth1", CircuitState::Up))
            .step("link_down", |a| a.circuit_state("eth1", CircuitState::Configured))
            .step("destroy_area", |a| a.committed().areas(0).no_circuit("eth1"))
    }

    #[test]
    fn test_interface_events_before_and_after_config() {
        scenario().run().unwrap();
    }
}

mod area_and_circuit_together {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("area_and_circuit_together")
            .operations_source(
                r#"
--# everything
set /interface[name='eth0']/isis/area-tag core-9
set /isis/instance[area-tag='core-9']
"#,
            )
            .unwrap()
            .step("everything", |a| {
                a.committed()
                    .areas(1)
                    .circuit_state("eth0", CircuitState::Configured)
            })
    }

    #[test]
    fn test_area_is_created_before_its_circuit() {
        scenario().run().unwrap();
    }
}

mod rejected_circuits {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("rejected_circuits")
            .operations_source(&script(
                r#"
--# unknown_area
set /interface[name='eth0']/isis/area-tag nowhere

--# enable
set /isis/instance[area-tag='core-1']/is-type level-1
set /interface[name='eth0']/isis/area-tag core-1
if-up eth0

--# move_area
set /isis/instance[area-tag='core-2']
set /interface[name='eth0']/isis/area-tag core-2

--# wrong_level
set /interface[name='eth0']/isis/circuit-type level-2-only

--# big_metric
set /interface[name='eth0']/isis/metric/level-1 16777216

--# same_level
set /interface[name='eth0']/isis/circuit-type level-1
set /interface[name='eth0']/isis/metric/level-1 100
"#,
            ))
            .unwrap()
            .step("create_area", |a| a.committed())
            .step("unknown_area", |a| {
                a.rejected_with("area nowhere is not configured").no_circuit("eth0")
            })
            .step("enable", |a| a.committed().circuit_state("eth0", CircuitState::Up))
            .step("move_area", |a| {
                a.rejected_with("ISIS circuit is already defined on core-1").areas(1)
            })
            .step("wrong_level", |a| a.rejected_with("Invalid circuit level for area core-1"))
            .step("big_metric", |a| a.rejected_with("exceeds 16777215"))
            .step("same_level", |a| {
                a.committed()
                    .custom(|d| d.circuit("eth0").is_some_and(|c| c.metric[0] == 100))
                    .shows(" isis circuit-type level-1\n")
            })
    }

    #[test]
    fn test_invalid_circuit_changes_are_rejected() {
        scenario().run().unwrap();
    }
}

mod address_families {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("address_families")
            .operations_source(&script(
                r#"
--# dual_stack
set /interface[name='eth0']/isis/area-tag core-1
set /interface[name='eth0']/isis/ipv4-routing
set /interface[name='eth0']/isis/ipv6-routing

--# drop_ipv4
delete /interface[name='eth0']/isis/ipv4-routing

--# point_to_point
set /interface[name='eth0']/isis/network-type point-to-point
set /interface[name='eth0']/isis/passive

--# back_to_broadcast
delete /interface[name='eth0']/isis/network-type
"#,
            ))
            .unwrap()
            .step("create_area", |a| a.committed())
            .step("dual_stack", |a| {
                a.committed().custom(|d| {
                    d.circuit("eth0")
                        .is_some_and(|c| c.ipv4_routing && c.ipv6_routing)
                })
            })
            .step("drop_ipv4", |a| {
                a.committed()
                    .custom(|d| {
                        d.circuit("eth0")
                            .is_some_and(|c| !c.ipv4_routing && c.ipv6_routing)
                    })
                    .hides(" ip router isis")
                    .shows(" ipv6 router isis core-1\n")
            })
            .step("point_to_point", |a| {
                a.committed()
                    .shows(" isis network point-to-point\n isis passive\n")
            })
            .step("back_to_broadcast", |a| {
                a.committed()
                    .hides("point-to-point")
                    .custom(|d| d.circuit("eth0").is_some_and(|c| c.passive))
            })
    }

    #[test]
    fn test_address_families_and_network_type() {
        scenario().run().unwrap();
    }
}
