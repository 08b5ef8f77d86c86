//! 学生存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::course_students::{self, Entity as CourseStudents};
use crate::entity::courses::{self, Entity as Courses};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{CourseApiError, Result};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentListQuery},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = ActiveModel {
            name: Set(req.name),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student(Vec::new()))
    }

    /// 通过 ID 获取学生及其所在课程
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let Some(model) = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("查询学生失败: {e}")))?
        else {
            return Ok(None);
        };

        let courses = model
            .find_related(Courses)
            .order_by_asc(courses::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("查询学生课程失败: {e}")))?;

        Ok(Some(
            model.into_student(courses.into_iter().map(|c| c.id).collect()),
        ))
    }

    /// 列出学生
    pub async fn list_students_impl(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        let mut select = Students::find();

        if let Some(name) = query.name {
            select = select.filter(Column::Name.eq(name));
        }

        let students = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("查询学生列表失败: {e}")))?;

        let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
        let mut courses = self.load_student_courses(&ids).await?;

        Ok(students
            .into_iter()
            .map(|s| {
                let course_ids = courses.remove(&s.id).unwrap_or_default();
                s.into_student(course_ids)
            })
            .collect())
    }

    /// 批量加载学生所在的课程 ID
    async fn load_student_courses(&self, student_ids: &[i64]) -> Result<HashMap<i64, Vec<i64>>> {
        let mut map: HashMap<i64, Vec<i64>> = HashMap::new();
        if student_ids.is_empty() {
            return Ok(map);
        }

        let links = CourseStudents::find()
            .filter(course_students::Column::StudentId.is_in(student_ids.iter().copied()))
            .order_by_asc(course_students::Column::CourseId)
            .all(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("查询学生课程失败: {e}")))?;

        for link in links {
            map.entry(link.student_id).or_default().push(link.course_id);
        }

        Ok(map)
    }
}
