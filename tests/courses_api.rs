//! 课程接口集成测试

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use common::{course_factory, create_user, memory_storage, student_factory, test_app};
use rust_courses_api::models::courses::requests::CourseListQuery;

#[actix_web::test]
async fn test_get_first_course() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let courses = course_factory(&storage, user.id, 10).await;
    let first_course = &courses[0];
    let app = test_app!(storage);

    let req = test::TestRequest::get()
        .uri(&format!("/courses/?id={}", first_course.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let data: Value = test::read_body_json(resp).await;
    let data = data.as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], first_course.name.as_str());
}

#[actix_web::test]
async fn test_get_all_courses() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    course_factory(&storage, user.id, 10).await;
    let app = test_app!(storage);

    let req = test::TestRequest::get().uri("/courses/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let data: Value = test::read_body_json(resp).await;
    let data = data.as_array().unwrap();

    let courses = storage
        .list_courses(CourseListQuery::default())
        .await
        .unwrap();
    assert_eq!(data.len(), courses.len());
    assert_eq!(data.len(), 10);
    for (i, course) in courses.iter().enumerate() {
        assert_eq!(data[i]["name"], course.name.as_str());
        assert_eq!(data[i]["id"], course.id);
    }
}

#[actix_web::test]
async fn test_check_filter_id() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let courses = course_factory(&storage, user.id, 12).await;
    let filter_id = courses[10].id;
    let app = test_app!(storage);

    let req = test::TestRequest::get()
        .uri(&format!("/courses/?id={filter_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let data: Value = test::read_body_json(resp).await;
    let data = data.as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], filter_id);
}

#[actix_web::test]
async fn test_check_filter_name() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let courses = course_factory(&storage, user.id, 20).await;
    let course_name = courses[15].name.clone();
    let count = storage
        .count_courses(CourseListQuery {
            id: None,
            name: Some(course_name.clone()),
        })
        .await
        .unwrap();
    let app = test_app!(storage);

    let req = test::TestRequest::get()
        .uri(&format!("/courses/?name={course_name}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let data: Value = test::read_body_json(resp).await;
    let data = data.as_array().unwrap();
    assert_eq!(data.len() as u64, count);
    assert!(count >= 1);
    for course in data {
        assert_eq!(course["name"], course_name.as_str());
    }
}

#[actix_web::test]
async fn test_create_course() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let count = storage
        .count_courses(CourseListQuery::default())
        .await
        .unwrap();
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/courses/")
        .set_form([("user", user.id.to_string()), ("name", "postgres".to_string())])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(
        storage
            .count_courses(CourseListQuery::default())
            .await
            .unwrap(),
        count + 1
    );
    assert_eq!(data["name"], "postgres");
    assert_eq!(data["user"], user.id);
    assert_eq!(data["students"], json!([]));
}

#[actix_web::test]
async fn test_create_course_with_json_body() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/courses/")
        .set_json(json!({ "user": user.id, "name": "  rust  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data["name"], "rust");
}

#[actix_web::test]
async fn test_create_course_with_unknown_user() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/courses/")
        .set_json(json!({ "user": 999, "name": "postgres" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        storage
            .count_courses(CourseListQuery::default())
            .await
            .unwrap(),
        0
    );
}

#[actix_web::test]
async fn test_create_course_with_invalid_body() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let app = test_app!(storage);

    let missing_name = test::TestRequest::post()
        .uri("/courses/")
        .set_json(json!({ "user": user.id }))
        .to_request();
    let resp = test::call_service(&app, missing_name).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data["code"], 1000);

    let blank_name = test::TestRequest::post()
        .uri("/courses/")
        .set_json(json!({ "user": user.id, "name": "   " }))
        .to_request();
    let resp = test::call_service(&app, blank_name).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data["data"]["field"], "name");
}

#[actix_web::test]
async fn test_update_course() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let courses = course_factory(&storage, user.id, 30).await;
    let id_course = courses[2].id;
    let app = test_app!(storage);

    let req = test::TestRequest::put()
        .uri(&format!("/courses/{id_course}/"))
        .set_form([("user", user.id.to_string()), ("name", "django_db".to_string())])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data["name"], "django_db");

    let persisted = storage.get_course_by_id(id_course).await.unwrap().unwrap();
    assert_eq!(persisted.name, "django_db");
}

#[actix_web::test]
async fn test_update_requires_all_fields() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let courses = course_factory(&storage, user.id, 1).await;
    let app = test_app!(storage);

    let req = test::TestRequest::put()
        .uri(&format!("/courses/{}/", courses[0].id))
        .set_json(json!({ "name": "only_name" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_partial_update_course() {
    let storage = memory_storage().await;
    let owner = create_user(&storage, "admin").await;
    let other = create_user(&storage, "lecturer").await;
    let courses = course_factory(&storage, owner.id, 3).await;
    let course = &courses[1];
    let app = test_app!(storage);

    let req = test::TestRequest::patch()
        .uri(&format!("/courses/{}/", course.id))
        .set_json(json!({ "name": "renamed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data["name"], "renamed");
    assert_eq!(data["user"], owner.id);

    let req = test::TestRequest::patch()
        .uri(&format!("/courses/{}/", course.id))
        .set_json(json!({ "user": other.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let persisted = storage.get_course_by_id(course.id).await.unwrap().unwrap();
    assert_eq!(persisted.name, "renamed");
    assert_eq!(persisted.user, other.id);
}

#[actix_web::test]
async fn test_update_missing_course() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let app = test_app!(storage);

    let req = test::TestRequest::put()
        .uri("/courses/404/")
        .set_json(json!({ "user": user.id, "name": "ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data["code"], 2001);
}

#[actix_web::test]
async fn test_delete_course() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let courses = course_factory(&storage, user.id, 5).await;
    let courses_id = courses[4].id;
    let app = test_app!(storage);

    let req = test::TestRequest::delete()
        .uri(&format!("/courses/{courses_id}/"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(!storage.course_exists(courses_id).await.unwrap());
    assert_eq!(
        storage
            .count_courses(CourseListQuery::default())
            .await
            .unwrap(),
        4
    );

    // 再次删除返回 404
    let req = test::TestRequest::delete()
        .uri(&format!("/courses/{courses_id}/"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_get_course() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let courses = course_factory(&storage, user.id, 2).await;
    let app = test_app!(storage);

    let req = test::TestRequest::get()
        .uri(&format!("/courses/{}/", courses[1].id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data["id"], courses[1].id);
    assert_eq!(data["name"], courses[1].name.as_str());

    let req = test::TestRequest::get().uri("/courses/abc/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/courses/0/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_add_student_to_course() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let course = course_factory(&storage, user.id, 1).await.remove(0);
    let student = student_factory(&storage, 1).await.remove(0);
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri(&format!("/courses/{}/", course.id))
        .set_form([("student_id", student.id.to_string())])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        storage
            .course_has_student(course.id, student.id)
            .await
            .unwrap()
    );
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data["students"], json!([student.id]));
}

#[actix_web::test]
async fn test_add_student_twice_is_idempotent() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let course = course_factory(&storage, user.id, 1).await.remove(0);
    let students = student_factory(&storage, 2).await;
    let app = test_app!(storage);

    for student_id in [students[1].id, students[0].id, students[1].id] {
        let req = test::TestRequest::post()
            .uri(&format!("/courses/{}/", course.id))
            .set_json(json!({ "student_id": student_id }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let persisted = storage.get_course_by_id(course.id).await.unwrap().unwrap();
    assert_eq!(persisted.students, vec![students[0].id, students[1].id]);
}

#[actix_web::test]
async fn test_add_unknown_student_or_course() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let course = course_factory(&storage, user.id, 1).await.remove(0);
    let student = student_factory(&storage, 1).await.remove(0);
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri(&format!("/courses/{}/", course.id))
        .set_json(json!({ "student_id": 999 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data["code"], 3001);

    let req = test::TestRequest::post()
        .uri("/courses/999/")
        .set_json(json!({ "student_id": student.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data["code"], 2001);
}

#[actix_web::test]
async fn test_delete_course_keeps_students() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let courses = course_factory(&storage, user.id, 2).await;
    let student = student_factory(&storage, 1).await.remove(0);
    for course in &courses {
        storage
            .add_student_to_course(course.id, student.id)
            .await
            .unwrap();
    }
    let app = test_app!(storage);

    let req = test::TestRequest::delete()
        .uri(&format!("/courses/{}/", courses[0].id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let remaining = storage.get_student_by_id(student.id).await.unwrap().unwrap();
    assert_eq!(remaining.courses, vec![courses[1].id]);
}

#[actix_web::test]
async fn test_empty_filters_are_ignored() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    course_factory(&storage, user.id, 4).await;
    let app = test_app!(storage);

    let req = test::TestRequest::get()
        .uri("/courses/?id=&name=")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data.as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_combined_filters() {
    let storage = memory_storage().await;
    let user = create_user(&storage, "admin").await;
    let courses = course_factory(&storage, user.id, 3).await;
    let app = test_app!(storage);

    let req = test::TestRequest::get()
        .uri(&format!("/courses/?id={}&name=no_such_course", courses[0].id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let data: Value = test::read_body_json(resp).await;
    assert!(data.as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/courses/?id={}&name={}", courses[0].id, courses[0].name))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_invalid_id_filter_is_bad_request() {
    let storage = memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::get().uri("/courses/?id=abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let data: Value = test::read_body_json(resp).await;
    assert_eq!(data["code"], 1000);
}
