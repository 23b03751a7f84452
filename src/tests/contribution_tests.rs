use crate::core::errors::PollenHiveError;
use crate::core::models::contribution::{
    Channel, ContributionFilter, ContributionStatus, ContributionUpdate, NewContribution,
};
use crate::core::models::fund::FundUpdate;
use crate::tests::{ADMIN, create_test_service, offline_contribution, seed_fund, seed_member};
use chrono::{Duration, Utc};

#[tokio::test]
async fn test_minimal_contribution_gets_defaults() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;

    let input = NewContribution {
        account_id: Some("A1".to_string()),
        fund_id: Some(fund.id.clone()),
        amount: Some(25.0),
        ..Default::default()
    };
    let created = service.create_contribution(input, Some(ADMIN)).await.unwrap();

    let fetched = service.get_contribution(&created.id).await.unwrap();
    assert_eq!(fetched.status, ContributionStatus::Pending);
    assert_eq!(fetched.channel, Channel::Offline);
    assert_eq!(fetched.received_by_user_id.as_deref(), Some(ADMIN));
    assert!(fetched.member_id.is_none());
    assert!((Utc::now() - fetched.date_received) < Duration::seconds(5));
}

#[tokio::test]
async fn test_required_fields_checked_in_order() {
    let service = create_test_service();

    let result = service.create_contribution(NewContribution::default(), Some(ADMIN)).await;
    assert!(matches!(result, Err(PollenHiveError::FundIdRequired)));

    let input = NewContribution {
        fund_id: Some("F1".to_string()),
        account_id: Some("   ".to_string()),
        ..Default::default()
    };
    let result = service.create_contribution(input, Some(ADMIN)).await;
    assert!(matches!(result, Err(PollenHiveError::AccountIdRequired)));

    let input = NewContribution {
        fund_id: Some("F1".to_string()),
        account_id: Some("A1".to_string()),
        ..Default::default()
    };
    let result = service.create_contribution(input, Some(ADMIN)).await;
    assert_eq!(result.unwrap_err().to_string(), "Valid amount is required.");
}

#[tokio::test]
async fn test_non_positive_amount_rejected() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;

    for amount in [0.0, -10.0] {
        let result = service
            .create_contribution(offline_contribution("A1", &fund.id, amount), Some(ADMIN))
            .await;
        assert_eq!(result.unwrap_err().to_string(), "Valid amount is required.");
    }
}

#[tokio::test]
async fn test_member_from_other_account_rejected() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;
    let member = seed_member(&service, "A2", "Ama Mensah", "0240000001").await;

    let mut input = offline_contribution("A1", &fund.id, 10.0);
    input.member_id = Some(member.id);
    let result = service.create_contribution(input, Some(ADMIN)).await;
    assert_eq!(result.unwrap_err().to_string(), "Member does not belong to this account.");
}

#[tokio::test]
async fn test_unknown_member_checked_before_fund() {
    let service = create_test_service();

    let mut input = offline_contribution("A1", "no-such-fund", 10.0);
    input.member_id = Some("ghost".to_string());
    let result = service.create_contribution(input, Some(ADMIN)).await;
    assert!(matches!(result, Err(PollenHiveError::MemberNotFound)));
}

#[tokio::test]
async fn test_fund_lookup_failures() {
    let service = create_test_service();
    let foreign = seed_fund(&service, "A2", "Elsewhere", None).await;

    let result = service
        .create_contribution(offline_contribution("A1", "missing", 10.0), Some(ADMIN))
        .await;
    assert_eq!(result.unwrap_err().to_string(), "Fund not found.");

    let result = service
        .create_contribution(offline_contribution("A1", &foreign.id, 10.0), Some(ADMIN))
        .await;
    assert_eq!(result.unwrap_err().to_string(), "Fund does not belong to this account.");
}

#[tokio::test]
async fn test_inactive_fund_message_names_fund() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "Roof Repairs", None).await;
    service
        .update_fund(
            &fund.id,
            FundUpdate {
                is_active: Some(false),
                ..Default::default()
            },
            Some(ADMIN),
        )
        .await
        .unwrap();

    let result = service
        .create_contribution(offline_contribution("A1", &fund.id, 10.0), Some(ADMIN))
        .await;
    let err = result.unwrap_err();
    assert!(matches!(err, PollenHiveError::FundInactive(_)));
    assert_eq!(
        err.to_string(),
        "Fund \"Roof Repairs\" is inactive and cannot accept contributions."
    );
}

#[tokio::test]
async fn test_minimum_contribution_enforced() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "Building Fund", Some(50.0)).await;

    let result = service
        .create_contribution(offline_contribution("A1", &fund.id, 30.0), Some(ADMIN))
        .await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "Minimum contribution for Building Fund is $50."
    );

    let exact = service
        .create_contribution(offline_contribution("A1", &fund.id, 50.0), Some(ADMIN))
        .await
        .unwrap();
    assert_eq!(exact.amount, 50.0);
}

#[tokio::test]
async fn test_offline_requires_receiver() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;

    let result = service
        .create_contribution(offline_contribution("A1", &fund.id, 10.0), None)
        .await;
    assert!(matches!(result, Err(PollenHiveError::ReceivedByRequired)));

    let mut input = offline_contribution("A1", &fund.id, 10.0);
    input.received_by_user_id = Some("treasurer".to_string());
    let created = service.create_contribution(input, Some(ADMIN)).await.unwrap();
    assert_eq!(created.received_by_user_id.as_deref(), Some("treasurer"));
}

#[tokio::test]
async fn test_online_without_reference_is_accepted() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;

    let input = NewContribution {
        account_id: Some("A1".to_string()),
        fund_id: Some(fund.id.clone()),
        amount: Some(15.0),
        channel: Some(Channel::Online),
        ..Default::default()
    };
    let created = service.create_contribution(input, None).await.unwrap();
    assert_eq!(created.channel, Channel::Online);
    assert_eq!(created.status, ContributionStatus::Pending);
    assert!(created.payment_reference.is_none());
    assert!(created.received_by_user_id.is_none());
}

#[tokio::test]
async fn test_online_ignores_acting_user_as_receiver() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;

    let input = NewContribution {
        account_id: Some("A1".to_string()),
        fund_id: Some(fund.id.clone()),
        amount: Some(15.0),
        channel: Some(Channel::Online),
        payment_reference: Some("PAY-123".to_string()),
        ..Default::default()
    };
    let created = service.create_contribution(input, Some(ADMIN)).await.unwrap();
    assert!(created.received_by_user_id.is_none());
    assert_eq!(created.payment_reference.as_deref(), Some("PAY-123"));
}

#[tokio::test]
async fn test_explicit_status_and_date_are_kept() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;
    let received = Utc::now() - Duration::days(3);

    let mut input = offline_contribution("A1", &fund.id, 10.0);
    input.status = Some(ContributionStatus::Confirmed);
    input.date_received = Some(received);
    let created = service.create_contribution(input, Some(ADMIN)).await.unwrap();
    assert_eq!(created.status, ContributionStatus::Confirmed);
    assert_eq!(created.date_received, received);
}

#[tokio::test]
async fn test_confirm_and_reject() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;
    let first = service
        .create_contribution(offline_contribution("A1", &fund.id, 10.0), Some(ADMIN))
        .await
        .unwrap();
    let second = service
        .create_contribution(offline_contribution("A1", &fund.id, 20.0), Some(ADMIN))
        .await
        .unwrap();

    let confirmed = service.confirm_contribution(&first.id, Some(ADMIN)).await.unwrap();
    assert_eq!(confirmed.status, ContributionStatus::Confirmed);

    // Double confirm is allowed.
    let again = service.confirm_contribution(&first.id, Some(ADMIN)).await.unwrap();
    assert_eq!(again.status, ContributionStatus::Confirmed);

    let rejected = service.reject_contribution(&second.id, Some(ADMIN)).await.unwrap();
    assert_eq!(rejected.status, ContributionStatus::Failed);
    let value = serde_json::to_value(&rejected).unwrap();
    assert_eq!(value["status"], "failed");
}

#[tokio::test]
async fn test_lifecycle_on_missing_contribution() {
    let service = create_test_service();

    let result = service.confirm_contribution("nope", Some(ADMIN)).await;
    assert_eq!(result.unwrap_err().to_string(), "Contribution not found.");
    assert!(matches!(
        service.reject_contribution("nope", None).await,
        Err(PollenHiveError::ContributionNotFound)
    ));
    assert!(matches!(
        service
            .update_contribution("nope", ContributionUpdate::default(), None)
            .await,
        Err(PollenHiveError::ContributionNotFound)
    ));
    assert!(matches!(
        service.delete_contribution("nope", None).await,
        Err(PollenHiveError::ContributionNotFound)
    ));
}

#[tokio::test]
async fn test_update_and_delete() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;
    let created = service
        .create_contribution(offline_contribution("A1", &fund.id, 10.0), Some(ADMIN))
        .await
        .unwrap();

    let updated = service
        .update_contribution(
            &created.id,
            ContributionUpdate {
                amount: Some(12.5),
                comment: Some("Corrected amount".to_string()),
                ..Default::default()
            },
            Some(ADMIN),
        )
        .await
        .unwrap();
    assert_eq!(updated.amount, 12.5);
    assert_eq!(updated.comment.as_deref(), Some("Corrected amount"));
    assert_eq!(updated.fund_id, created.fund_id);
    assert!(updated.updated_at >= created.updated_at);

    service.delete_contribution(&created.id, Some(ADMIN)).await.unwrap();
    assert!(matches!(
        service.get_contribution(&created.id).await,
        Err(PollenHiveError::ContributionNotFound)
    ));
}

#[tokio::test]
async fn test_update_keeps_contribution_invariants() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;
    let outsider = seed_member(&service, "A2", "Kofi", "0240000009").await;
    let created = service
        .create_contribution(offline_contribution("A1", &fund.id, 10.0), Some(ADMIN))
        .await
        .unwrap();

    for amount in [0.0, -5.0, f64::NAN] {
        let result = service
            .update_contribution(
                &created.id,
                ContributionUpdate {
                    amount: Some(amount),
                    ..Default::default()
                },
                Some(ADMIN),
            )
            .await;
        assert!(matches!(result, Err(PollenHiveError::InvalidAmount)), "amount {amount}");
    }

    let result = service
        .update_contribution(
            &created.id,
            ContributionUpdate {
                member_id: Some(outsider.id.clone()),
                ..Default::default()
            },
            Some(ADMIN),
        )
        .await;
    assert!(matches!(result, Err(PollenHiveError::MemberAccountMismatch)));

    let result = service
        .update_contribution(
            &created.id,
            ContributionUpdate {
                member_id: Some("ghost".to_string()),
                ..Default::default()
            },
            Some(ADMIN),
        )
        .await;
    assert!(matches!(result, Err(PollenHiveError::MemberNotFound)));

    let result = service
        .update_contribution(
            &created.id,
            ContributionUpdate {
                status: Some(ContributionStatus::Reversed),
                ..Default::default()
            },
            Some(ADMIN),
        )
        .await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "Status \"reversed\" cannot be set on a contribution."
    );

    // Rejected edits leave the stored row untouched.
    let stored = service.get_contribution(&created.id).await.unwrap();
    assert_eq!(stored.amount, 10.0);
    assert!(stored.member_id.is_none());
    assert_eq!(stored.status, ContributionStatus::Pending);
}

#[tokio::test]
async fn test_intake_refuses_reversed_status() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;
    let mut input = offline_contribution("A1", &fund.id, 10.0);
    input.status = Some(ContributionStatus::Reversed);

    let result = service.create_contribution(input, Some(ADMIN)).await;
    assert!(matches!(result, Err(PollenHiveError::StatusNotAllowed(_))));
    assert!(
        service
            .list_contributions(&ContributionFilter {
                account_id: "A1".to_string(),
                ..Default::default()
            })
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_list_filters() {
    let service = create_test_service();
    let general = seed_fund(&service, "A1", "General", None).await;
    let welfare = seed_fund(&service, "A1", "Welfare", None).await;
    let other = seed_fund(&service, "A2", "Other", None).await;

    let a = service
        .create_contribution(offline_contribution("A1", &general.id, 10.0), Some(ADMIN))
        .await
        .unwrap();
    service
        .create_contribution(offline_contribution("A1", &welfare.id, 20.0), Some(ADMIN))
        .await
        .unwrap();
    service
        .create_contribution(offline_contribution("A2", &other.id, 30.0), Some(ADMIN))
        .await
        .unwrap();
    service.confirm_contribution(&a.id, Some(ADMIN)).await.unwrap();

    let all = service
        .list_contributions(&ContributionFilter {
            account_id: "A1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let confirmed = service
        .list_contributions(&ContributionFilter {
            account_id: "A1".to_string(),
            status: Some(ContributionStatus::Confirmed),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].id, a.id);

    let welfare_only = service
        .list_contributions(&ContributionFilter {
            account_id: "A1".to_string(),
            fund_id: Some(welfare.id.clone()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(welfare_only.len(), 1);
    assert_eq!(welfare_only[0].amount, 20.0);
}

#[tokio::test]
async fn test_pending_totals_and_fund_stats() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;
    let ama = seed_member(&service, "A1", "Ama", "0240000001").await;
    let kofi = seed_member(&service, "A1", "Kofi", "0240000002").await;

    let mut ids = Vec::new();
    for (member, amount) in [(Some(&ama), 10.0), (Some(&ama), 15.0), (Some(&kofi), 20.0), (None, 5.0)] {
        let mut input = offline_contribution("A1", &fund.id, amount);
        input.member_id = member.map(|m| m.id.clone());
        ids.push(service.create_contribution(input, Some(ADMIN)).await.unwrap().id);
    }
    let pending_only = service
        .create_contribution(offline_contribution("A1", &fund.id, 100.0), Some(ADMIN))
        .await
        .unwrap();

    for id in &ids {
        service.confirm_contribution(id, Some(ADMIN)).await.unwrap();
    }

    let pending = service.pending_totals("A1").await.unwrap();
    assert_eq!(pending.count, 1);
    assert_eq!(pending.total, 100.0);

    let stats = service.fund_stats(&fund.id).await.unwrap();
    assert_eq!(stats.total_confirmed, 50.0);
    assert_eq!(stats.contributor_count, 2);

    let ama_total = service.member_total(&ama.id).await.unwrap();
    assert_eq!(ama_total.total_confirmed, 25.0);
    assert_eq!(ama_total.contribution_count, 2);

    service.reject_contribution(&pending_only.id, Some(ADMIN)).await.unwrap();
    let pending = service.pending_totals("A1").await.unwrap();
    assert_eq!(pending.count, 0);
    assert_eq!(pending.total, 0.0);
}

#[tokio::test]
async fn test_account_fund_stats_covers_every_fund() {
    let service = create_test_service();
    let general = seed_fund(&service, "A1", "General", None).await;
    seed_fund(&service, "A1", "Welfare", None).await;

    let c = service
        .create_contribution(offline_contribution("A1", &general.id, 40.0), Some(ADMIN))
        .await
        .unwrap();
    service.confirm_contribution(&c.id, Some(ADMIN)).await.unwrap();

    let stats = service.account_fund_stats("A1").await.unwrap();
    assert_eq!(stats.len(), 2);
    let general_stats = stats.iter().find(|s| s.fund_id == general.id).unwrap();
    assert_eq!(general_stats.total_confirmed, 40.0);
    assert_eq!(general_stats.contributor_count, 0);
}

#[tokio::test]
async fn test_activity_log_records_lifecycle() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;
    let c = service
        .create_contribution(offline_contribution("A1", &fund.id, 10.0), Some(ADMIN))
        .await
        .unwrap();
    service.confirm_contribution(&c.id, Some(ADMIN)).await.unwrap();

    let logs = service.get_app_logs().await.unwrap();
    let actions: Vec<&str> = logs.iter().map(|l| l.action.as_str()).collect();
    assert_eq!(actions, vec!["FUND_CREATED", "CONTRIBUTION_RECORDED", "CONTRIBUTION_CONFIRMED"]);
    assert_eq!(logs[2].user_id.as_deref(), Some(ADMIN));
}
