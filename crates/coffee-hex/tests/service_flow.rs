use coffee_hex::application::shop_service::CoffeeShopService;
use coffee_hex::errors::AppError;
use coffee_repo::memory::InMemoryRepo;
use coffee_types::ports::order_repository::OrderRepository;

// End-to-end service flow against the in-memory adapter.
#[tokio::test]
async fn order_list_delete_flow() {
    let repo = InMemoryRepo::new();
    let svc = CoffeeShopService::new(repo.clone(), "secret");

    for id in [1, 3, 1] {
        svc.place_order(id, 1, true).await.unwrap();
    }
    assert_eq!(svc.list_orders().await.unwrap(), vec![1, 3, 1]);
    assert_eq!(repo.list().await.unwrap().len(), 3);

    svc.delete_order(2, "secret").await.unwrap();
    assert_eq!(svc.list_orders().await.unwrap(), vec![1, 1]);

    let missing = svc.delete_order(3, "secret").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    svc.delete_order(1, "secret").await.unwrap();
    svc.delete_order(1, "secret").await.unwrap();
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn n_sequential_orders_are_listed_in_order() {
    let svc = CoffeeShopService::new(InMemoryRepo::new(), "secret");
    let placed: Vec<u32> = (0..20).map(|i| (i % 4) + 1).collect();
    for id in &placed {
        svc.place_order(*id as i64, 1, true).await.unwrap();
    }
    assert_eq!(svc.list_orders().await.unwrap(), placed);
}
