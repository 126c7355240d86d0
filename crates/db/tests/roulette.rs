//! Integration tests for the roulette repository.

use chrono::NaiveDate;
use sqlx::PgPool;
use moguri_db::models::member::CreateMember;
use moguri_db::models::roulette::CreateRoulette;
use moguri_db::repositories::{MemberRepo, RouletteRepo};

async fn seed_member(pool: &PgPool) -> i64 {
    MemberRepo::create(
        pool,
        &CreateMember {
            email: "spin@x.com".to_string(),
            password: "hashed".to_string(),
            nick_name: "Spinner".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
}

#[sqlx::test]
async fn test_has_played_flips_after_create(pool: PgPool) {
    let member_id = seed_member(&pool).await;

    assert!(!RouletteRepo::has_played_on(&pool, member_id, day(1)).await.unwrap());

    RouletteRepo::create(
        &pool,
        &CreateRoulette {
            member_id,
            reward: 5,
            play_date: day(1),
        },
    )
    .await
    .unwrap();

    assert!(RouletteRepo::has_played_on(&pool, member_id, day(1)).await.unwrap());
    assert!(
        !RouletteRepo::has_played_on(&pool, member_id, day(2)).await.unwrap(),
        "a play only counts for its own day"
    );
}

#[sqlx::test]
async fn test_second_play_same_day_violates_unique_constraint(pool: PgPool) {
    let member_id = seed_member(&pool).await;
    let play = CreateRoulette {
        member_id,
        reward: 1,
        play_date: day(3),
    };

    RouletteRepo::create(&pool, &play).await.unwrap();
    let err = RouletteRepo::create(&pool, &play)
        .await
        .expect_err("duplicate play should fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_roulettes_member_play_date"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_create_and_credit_adds_reward(pool: PgPool) {
    let member_id = seed_member(&pool).await;
    MemberRepo::update_cotton_candy(&pool, member_id, 10).await.unwrap();

    let play = RouletteRepo::create_and_credit(
        &pool,
        &CreateRoulette {
            member_id,
            reward: 20,
            play_date: day(4),
        },
    )
    .await
    .unwrap();

    assert_eq!(play.reward, 20);
    assert_eq!(
        MemberRepo::get_cotton_candy(&pool, member_id).await.unwrap(),
        Some(30)
    );
}

#[sqlx::test]
async fn test_failed_play_does_not_credit(pool: PgPool) {
    let member_id = seed_member(&pool).await;
    let play = CreateRoulette {
        member_id,
        reward: 50,
        play_date: day(5),
    };

    RouletteRepo::create_and_credit(&pool, &play).await.unwrap();
    assert!(RouletteRepo::create_and_credit(&pool, &play).await.is_err());

    assert_eq!(
        MemberRepo::get_cotton_candy(&pool, member_id).await.unwrap(),
        Some(50),
        "rolled-back play must not credit the balance"
    );
}

#[sqlx::test]
async fn test_history_is_newest_first(pool: PgPool) {
    let member_id = seed_member(&pool).await;
    for d in 1..=3 {
        RouletteRepo::create(
            &pool,
            &CreateRoulette {
                member_id,
                reward: d as i32,
                play_date: day(d),
            },
        )
        .await
        .unwrap();
    }

    let history = RouletteRepo::list_by_member(&pool, member_id, 2, 0).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].play_date, day(3));
    assert_eq!(history[1].play_date, day(2));
    assert_eq!(RouletteRepo::count_by_member(&pool, member_id).await.unwrap(), 3);
}
