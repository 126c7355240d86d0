//! Integration tests for the goal and goal quest repositories.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sqlx::PgPool;
use moguri_db::models::goal::{CreateGoal, UpdateGoal};
use moguri_db::models::goal_quest::CreateGoalQuest;
use moguri_db::models::member::CreateMember;
use moguri_db::repositories::{GoalQuestRepo, GoalRepo, MemberRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_member(pool: &PgPool, email: &str) -> i64 {
    MemberRepo::create(
        pool,
        &CreateMember {
            email: email.to_string(),
            password: "hashed".to_string(),
            nick_name: "Saver".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn new_goal(member_id: i64, name: &str) -> CreateGoal {
    CreateGoal {
        member_id,
        goal_name: name.to_string(),
        goal_amount: dec!(1000.00),
        current_amount: dec!(250.00),
        target_percent: dec!(25.00),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        goal_category: "travel".to_string(),
        reward_amount: dec!(10.00),
        quest_id: None,
    }
}

fn new_quest(category: &str, name: &str) -> CreateGoalQuest {
    CreateGoalQuest {
        goal_category: category.to_string(),
        quest_name: name.to_string(),
        description: None,
        reward_amount: None,
    }
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_and_find_goal(pool: PgPool) {
    let member_id = seed_member(&pool, "g@x.com").await;
    let goal = GoalRepo::create(&pool, &new_goal(member_id, "Trip")).await.unwrap();

    let found = GoalRepo::find_by_id(&pool, goal.id).await.unwrap().unwrap();
    assert_eq!(found.goal_name, "Trip");
    assert_eq!(found.goal_amount, dec!(1000.00));
    assert_eq!(found.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(found.quest_id, None);
}

#[sqlx::test]
async fn test_list_by_member_is_scoped_and_paged(pool: PgPool) {
    let alice = seed_member(&pool, "alice@x.com").await;
    let bob = seed_member(&pool, "bob@x.com").await;
    for i in 0..3 {
        GoalRepo::create(&pool, &new_goal(alice, &format!("A{i}")))
            .await
            .unwrap();
    }
    GoalRepo::create(&pool, &new_goal(bob, "B0")).await.unwrap();

    let page = GoalRepo::list_by_member(&pool, alice, 2, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.iter().all(|g| g.member_id == alice));
    assert_eq!(GoalRepo::count_by_member(&pool, alice).await.unwrap(), 3);
    assert_eq!(GoalRepo::count_by_member(&pool, bob).await.unwrap(), 1);
}

#[sqlx::test]
async fn test_partial_update(pool: PgPool) {
    let member_id = seed_member(&pool, "p@x.com").await;
    let goal = GoalRepo::create(&pool, &new_goal(member_id, "Car")).await.unwrap();

    let update = UpdateGoal {
        current_amount: Some(dec!(500.00)),
        target_percent: Some(dec!(50.00)),
        ..Default::default()
    };
    let updated = GoalRepo::update(&pool, goal.id, &update).await.unwrap().unwrap();

    assert_eq!(updated.current_amount, dec!(500.00));
    assert_eq!(updated.target_percent, dec!(50.00));
    assert_eq!(updated.goal_name, "Car", "unset fields are untouched");
    assert_eq!(updated.goal_amount, dec!(1000.00));
}

#[sqlx::test]
async fn test_delete_goal(pool: PgPool) {
    let member_id = seed_member(&pool, "del@x.com").await;
    let goal = GoalRepo::create(&pool, &new_goal(member_id, "Gone")).await.unwrap();

    assert!(GoalRepo::delete(&pool, goal.id).await.unwrap());
    assert!(GoalRepo::find_by_id(&pool, goal.id).await.unwrap().is_none());
    assert!(!GoalRepo::delete(&pool, goal.id).await.unwrap());
}

#[sqlx::test]
async fn test_deleting_member_cascades_to_goals(pool: PgPool) {
    let member_id = seed_member(&pool, "cascade@x.com").await;
    let goal = GoalRepo::create(&pool, &new_goal(member_id, "Orphan")).await.unwrap();

    MemberRepo::delete(&pool, member_id).await.unwrap();
    assert!(GoalRepo::find_by_id(&pool, goal.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Goal quests
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_quest_pages_and_count(pool: PgPool) {
    for i in 0..4 {
        GoalQuestRepo::create(&pool, &new_quest("food", &format!("Q{i}")))
            .await
            .unwrap();
    }

    let page = GoalQuestRepo::list(&pool, 3, 0).await.unwrap();
    assert_eq!(page.len(), 3);
    assert_eq!(page[0].quest_name, "Q0");
    assert_eq!(page[0].reward_amount, dec!(0));
    assert_eq!(GoalQuestRepo::list(&pool, 3, 3).await.unwrap().len(), 1);
    assert_eq!(GoalQuestRepo::count(&pool).await.unwrap(), 4);
}

#[sqlx::test]
async fn test_find_quest_by_category(pool: PgPool) {
    let first = GoalQuestRepo::create(&pool, &new_quest("travel", "Skip a taxi"))
        .await
        .unwrap();
    GoalQuestRepo::create(&pool, &new_quest("travel", "Pack lunch"))
        .await
        .unwrap();

    let found = GoalQuestRepo::find_by_category(&pool, "travel")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, first.id, "oldest quest in the category is suggested");

    let none = GoalQuestRepo::find_by_category(&pool, "unknown").await.unwrap();
    assert!(none.is_none());
}
