
use crate::error::ContractError;
use crate::state::RewardKind;
use cw_controllers::AdminError;
use suite::SuiteBuilder;

mod membership {
    use super::*;

    #[test]
    fn join_and_query() {
        let mut suite = SuiteBuilder::new().build();

        assert_eq!(suite.admin().unwrap().admin, Some("admin".to_owned()));
        assert!(suite.is_member("admin").unwrap());
        assert!(!suite.is_member("patient1").unwrap());

        suite.join("patient1").unwrap();
        assert!(suite.is_member("patient1").unwrap());

        let info = suite.member("patient1").unwrap().unwrap();
        assert_eq!(info.last_earn, None);
    }

    #[test]
    fn joining_twice_fails() {
        let mut suite = SuiteBuilder::new().with_member("patient1").build();

        let err = suite.join("patient1").unwrap_err();
        assert_eq!(ContractError::AlreadyMember {}, err.downcast().unwrap());

        // still exactly one membership record
        assert!(suite.is_member("patient1").unwrap());
        assert_eq!(2, suite.list_members().unwrap().len());
    }
}

mod earning {
    use super::*;

    #[test]
    fn member_earns_points() {
        let mut suite = SuiteBuilder::new().with_member("patient1").build();

        suite.earn_points("patient1", 100, "wellness survey").unwrap();

        assert_eq!(100, suite.points("patient1").unwrap());
        assert_eq!(100, suite.total_points().unwrap());

        let info = suite.member("patient1").unwrap().unwrap();
        assert!(info.last_earn.is_some());
    }

    #[test]
    fn stranger_cannot_earn() {
        let mut suite = SuiteBuilder::new().build();

        let err = suite.earn_points("patient1", 100, "x").unwrap_err();
        assert_eq!(
            ContractError::NotMember {
                addr: "patient1".to_owned()
            },
            err.downcast().unwrap()
        );
        assert_eq!(0, suite.points("patient1").unwrap());
    }

    #[test]
    fn zero_amount_rejected() {
        let mut suite = SuiteBuilder::new().with_member("patient1").build();

        let err = suite.earn_points("patient1", 0, "x").unwrap_err();
        assert_eq!(ContractError::ZeroAmount {}, err.downcast().unwrap());
    }

    #[test]
    fn cooldown_blocks_until_expired() {
        let cooldown = 24 * 60 * 60;
        let mut suite = SuiteBuilder::new()
            .with_earn_cooldown(cooldown)
            .with_member("patient1")
            .build();

        // first earn is free of any cooldown
        suite.earn_points("patient1", 100, "visit").unwrap();

        suite.advance_seconds(1);
        let err = suite.earn_points("patient1", 100, "visit").unwrap_err();
        assert!(matches!(
            err.downcast().unwrap(),
            ContractError::EarnCooldown { .. }
        ));
        assert_eq!(100, suite.points("patient1").unwrap());

        // a full day later earning works again
        suite.advance_seconds(cooldown);
        suite.earn_points("patient1", 100, "visit").unwrap();
        assert_eq!(200, suite.points("patient1").unwrap());

        // the cooldown applies per member
        suite.join("patient2").unwrap();
        suite.earn_points("patient2", 50, "visit").unwrap();
        assert_eq!(50, suite.points("patient2").unwrap());
    }
}

mod granting {
    use super::*;

    #[test]
    fn admin_grants_and_auto_enrolls() {
        let mut suite = SuiteBuilder::new().build();

        suite
            .grant_points("admin", "patient1", 2_000, "signup bonus")
            .unwrap();

        assert!(suite.is_member("patient1").unwrap());
        assert_eq!(2_000, suite.points("patient1").unwrap());
        assert_eq!(2_000, suite.total_points().unwrap());
    }

    #[test]
    fn non_admin_cannot_grant() {
        let mut suite = SuiteBuilder::new().with_member("patient1").build();

        let err = suite
            .grant_points("patient1", "patient1", 100, "self-serve")
            .unwrap_err();
        assert_eq!(
            ContractError::Admin(AdminError::NotAdmin {}),
            err.downcast().unwrap()
        );
        assert_eq!(0, suite.points("patient1").unwrap());
    }
}

mod transfers {
    use super::*;

    #[test]
    fn points_move_between_members() {
        let mut suite = SuiteBuilder::new()
            .with_member("patient2")
            .with_granted_points("patient1", 1_000)
            .build();

        suite.transfer_points("patient1", "patient2", 400).unwrap();

        assert_eq!(600, suite.points("patient1").unwrap());
        assert_eq!(400, suite.points("patient2").unwrap());
        // transfers redistribute, the total stays
        assert_eq!(1_000, suite.total_points().unwrap());
    }

    #[test]
    fn transfer_to_stranger_fails() {
        let mut suite = SuiteBuilder::new()
            .with_granted_points("patient1", 1_000)
            .build();

        let err = suite
            .transfer_points("patient1", "patient2", 400)
            .unwrap_err();
        assert_eq!(
            ContractError::NotMember {
                addr: "patient2".to_owned()
            },
            err.downcast().unwrap()
        );
        assert_eq!(1_000, suite.points("patient1").unwrap());
    }

    #[test]
    fn overdraft_fails() {
        let mut suite = SuiteBuilder::new()
            .with_member("patient2")
            .with_granted_points("patient1", 300)
            .build();

        let err = suite
            .transfer_points("patient1", "patient2", 301)
            .unwrap_err();
        assert!(matches!(
            err.downcast().unwrap(),
            ContractError::NotEnoughPoints { .. }
        ));
        assert_eq!(300, suite.points("patient1").unwrap());
        assert_eq!(0, suite.points("patient2").unwrap());
    }
}

mod rewards {
    use super::*;

    #[test]
    fn catalog_lifecycle() {
        let mut suite = SuiteBuilder::new().build();

        let rewards = suite.list_rewards().unwrap();
        assert_eq!(5, rewards.len());

        suite
            .set_reward("admin", RewardKind::Tshirt, 1_500, true)
            .unwrap();
        let tshirt = suite.reward(RewardKind::Tshirt).unwrap();
        assert_eq!(1_500, tshirt.cost.u128());
        assert!(tshirt.active);

        // deactivation keeps the price on record
        suite
            .set_reward("admin", RewardKind::Tshirt, 1_500, false)
            .unwrap();
        let tshirt = suite.reward(RewardKind::Tshirt).unwrap();
        assert_eq!(1_500, tshirt.cost.u128());
        assert!(!tshirt.active);
    }

    #[test]
    fn non_admin_cannot_set_reward() {
        let mut suite = SuiteBuilder::new().with_member("patient1").build();

        let err = suite
            .set_reward("patient1", RewardKind::Massage, 100, true)
            .unwrap_err();
        assert_eq!(
            ContractError::Admin(AdminError::NotAdmin {}),
            err.downcast().unwrap()
        );
    }

    #[test]
    fn redeem_burns_points() {
        let mut suite = SuiteBuilder::new()
            .with_granted_points("patient1", 2_000)
            .build();

        suite.redeem_reward("patient1", RewardKind::Tshirt).unwrap();

        assert_eq!(1_000, suite.points("patient1").unwrap());
        assert_eq!(1_000, suite.total_points().unwrap());
    }

    #[test]
    fn inactive_reward_cannot_be_redeemed() {
        let mut suite = SuiteBuilder::new()
            .with_granted_points("patient1", 10_000)
            .build();

        let err = suite
            .redeem_reward("patient1", RewardKind::Other)
            .unwrap_err();
        assert_eq!(
            ContractError::RewardInactive {
                reward: "other".to_owned()
            },
            err.downcast().unwrap()
        );
        assert_eq!(10_000, suite.points("patient1").unwrap());
    }
}

mod ledger_invariant {
    use super::*;

    #[test]
    fn total_tracks_sum_of_balances() {
        let mut suite = SuiteBuilder::new()
            .with_member("patient1")
            .with_member("patient2")
            .build();

        suite.earn_points("patient1", 700, "survey").unwrap();
        suite
            .grant_points("admin", "patient2", 2_000, "signup")
            .unwrap();
        suite.transfer_points("patient2", "patient1", 500).unwrap();
        suite.redeem_reward("patient2", RewardKind::Tshirt).unwrap();
        suite
            .grant_points("admin", "patient3", 300, "referral")
            .unwrap();

        assert_eq!(1_200, suite.points("patient1").unwrap());
        assert_eq!(500, suite.points("patient2").unwrap());
        assert_eq!(300, suite.points("patient3").unwrap());

        let total = suite.total_points().unwrap();
        assert_eq!(2_000, total);
        assert_eq!(total, suite.balances_sum().unwrap());
    }
}
