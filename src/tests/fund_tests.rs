use crate::core::errors::PollenHiveError;
use crate::core::models::fund::{FundUpdate, NewFund};
use crate::tests::{ADMIN, create_test_service, offline_contribution, seed_fund};

#[tokio::test]
async fn test_create_fund_defaults() {
    let service = create_test_service();
    let fund = service
        .create_fund(
            NewFund {
                account_id: Some("A1".to_string()),
                name: Some("  Harvest Appeal  ".to_string()),
                description: Some("".to_string()),
                ..Default::default()
            },
            Some(ADMIN),
        )
        .await
        .unwrap();

    assert_eq!(fund.name, "Harvest Appeal");
    assert!(fund.is_active);
    assert!(!fund.is_public);
    assert!(fund.description.is_none());
    assert!(fund.default_amount.is_none());
}

#[tokio::test]
async fn test_create_fund_validation() {
    let service = create_test_service();

    let result = service
        .create_fund(
            NewFund {
                name: Some("General".to_string()),
                ..Default::default()
            },
            None,
        )
        .await;
    assert!(matches!(result, Err(PollenHiveError::AccountIdRequired)));

    let result = service
        .create_fund(
            NewFund {
                account_id: Some("A1".to_string()),
                name: Some(" ".to_string()),
                ..Default::default()
            },
            None,
        )
        .await;
    assert!(matches!(result, Err(PollenHiveError::FundNameRequired)));

    let result = service
        .create_fund(
            NewFund {
                account_id: Some("A1".to_string()),
                name: Some("General".to_string()),
                default_amount: Some(0.0),
                ..Default::default()
            },
            None,
        )
        .await;
    assert!(matches!(result, Err(PollenHiveError::InvalidDefaultAmount)));
}

#[tokio::test]
async fn test_public_listing_only_shows_public_active_funds() {
    let service = create_test_service();
    let open = seed_fund(&service, "A1", "Open", None).await;
    let closed = seed_fund(&service, "A1", "Closed", None).await;
    seed_fund(&service, "A1", "Private", None).await;

    for (fund, active) in [(&open, true), (&closed, false)] {
        service
            .update_fund(
                &fund.id,
                FundUpdate {
                    is_public: Some(true),
                    is_active: Some(active),
                    ..Default::default()
                },
                Some(ADMIN),
            )
            .await
            .unwrap();
    }

    let public = service.list_public_funds("A1").await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].id, open.id);

    assert_eq!(service.list_funds("A1").await.unwrap().len(), 3);
    assert!(service.list_funds("A2").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_and_delete_fund() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "General", None).await;

    let result = service
        .update_fund(
            &fund.id,
            FundUpdate {
                name: Some("".to_string()),
                ..Default::default()
            },
            None,
        )
        .await;
    assert!(matches!(result, Err(PollenHiveError::FundNameRequired)));

    let updated = service
        .update_fund(
            &fund.id,
            FundUpdate {
                default_amount: Some(Some(20.0)),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(updated.default_amount, Some(20.0));
    assert_eq!(updated.name, "General");

    let result = service
        .update_fund(
            &fund.id,
            FundUpdate {
                default_amount: Some(Some(-1.0)),
                ..Default::default()
            },
            None,
        )
        .await;
    assert!(matches!(result, Err(PollenHiveError::InvalidDefaultAmount)));
    assert_eq!(service.get_fund(&fund.id).await.unwrap().default_amount, Some(20.0));

    service.delete_fund(&fund.id, Some(ADMIN)).await.unwrap();
    assert!(matches!(service.get_fund(&fund.id).await, Err(PollenHiveError::FundNotFound)));
    assert!(matches!(
        service.delete_fund(&fund.id, Some(ADMIN)).await,
        Err(PollenHiveError::FundNotFound)
    ));
}

#[tokio::test]
async fn test_fund_stats_for_missing_fund() {
    let service = create_test_service();
    let result = service.fund_stats("missing").await;
    assert_eq!(result.unwrap_err().to_string(), "Fund not found.");
}

#[tokio::test]
async fn test_clearing_minimum_accepts_smaller_contributions() {
    let service = create_test_service();
    let fund = seed_fund(&service, "A1", "Building", Some(50.0)).await;
    assert!(matches!(
        service
            .create_contribution(offline_contribution("A1", &fund.id, 10.0), Some(ADMIN))
            .await,
        Err(PollenHiveError::BelowMinimumContribution { .. })
    ));

    let cleared = service
        .update_fund(
            &fund.id,
            FundUpdate {
                default_amount: Some(None),
                ..Default::default()
            },
            Some(ADMIN),
        )
        .await
        .unwrap();
    assert!(cleared.default_amount.is_none());

    service
        .create_contribution(offline_contribution("A1", &fund.id, 10.0), Some(ADMIN))
        .await
        .unwrap();
}
