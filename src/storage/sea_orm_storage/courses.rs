//! 课程存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::course_students::{self, Entity as CourseStudents};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses, Model};
use crate::entity::students::{self, Entity as Students};
use crate::entity::users::Entity as Users;
use crate::errors::{CourseApiError, Result};
use crate::models::courses::{
    entities::Course,
    requests::{CourseListQuery, CreateCourseRequest, PartialUpdateCourseRequest},
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select, Set, SqlErr, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        self.ensure_user_exists(req.user).await?;

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user),
            name: Set(req.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course(Vec::new()))
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let Some(model) = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("查询课程失败: {e}")))?
        else {
            return Ok(None);
        };

        let students = Self::course_student_ids(&self.db, &model).await?;
        Ok(Some(model.into_course(students)))
    }

    /// 按过滤条件列出课程
    pub async fn list_courses_impl(&self, query: CourseListQuery) -> Result<Vec<Course>> {
        let courses = Self::filtered_courses(query)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("查询课程列表失败: {e}")))?;

        let ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
        let mut students = self.load_course_students(&ids).await?;

        Ok(courses
            .into_iter()
            .map(|c| {
                let student_ids = students.remove(&c.id).unwrap_or_default();
                c.into_course(student_ids)
            })
            .collect())
    }

    /// 按过滤条件统计课程数量
    pub async fn count_courses_impl(&self, query: CourseListQuery) -> Result<u64> {
        Self::filtered_courses(query)
            .count(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("统计课程数量失败: {e}")))
    }

    /// 更新课程信息
    ///
    /// 课程不存在（包括并发删除）时返回 None；所属用户由外键校验。
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: PartialUpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let user_id = update.user;
        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(user) = user_id {
            model.user_id = Set(user);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        match model.update(&self.db).await {
            Ok(_) => {}
            Err(DbErr::RecordNotUpdated) => return Ok(None),
            Err(e) if Self::is_foreign_key_violation(&e) => {
                return Err(CourseApiError::validation(format!(
                    "Invalid pk \"{}\" - object does not exist.",
                    user_id.unwrap_or_default()
                )));
            }
            Err(e) => {
                return Err(CourseApiError::database_operation(format!(
                    "更新课程失败: {e}"
                )));
            }
        }

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程，同时清理学生关联
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CourseApiError::database_operation(format!("开启事务失败: {e}")))?;

        CourseStudents::delete_many()
            .filter(course_students::Column::CourseId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("删除课程学生关联失败: {e}")))?;

        let result = Courses::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("删除课程失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| CourseApiError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 课程是否存在
    pub async fn course_exists_impl(&self, id: i64) -> Result<bool> {
        let count = Courses::find()
            .filter(Column::Id.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(count > 0)
    }

    /// 将学生加入课程，已加入时不做任何修改
    ///
    /// 关联写入是第一条语句，唯一索引冲突直接忽略，课程与学生的存在性由外键保证。
    pub async fn add_student_to_course_impl(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Course> {
        let link = course_students::ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
            ..Default::default()
        };

        CourseStudents::insert(link)
            .on_conflict(
                OnConflict::columns([
                    course_students::Column::CourseId,
                    course_students::Column::StudentId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                if Self::is_foreign_key_violation(&e) {
                    CourseApiError::not_found(format!(
                        "课程 {course_id} 或学生 {student_id} 不存在"
                    ))
                } else {
                    CourseApiError::database_operation(format!("加入课程失败: {e}"))
                }
            })?;

        self.get_course_by_id_impl(course_id)
            .await?
            .ok_or_else(|| CourseApiError::not_found(format!("课程 {course_id} 不存在")))
    }

    /// 学生是否已在课程中
    pub async fn course_has_student_impl(&self, course_id: i64, student_id: i64) -> Result<bool> {
        let count = CourseStudents::find()
            .filter(course_students::Column::CourseId.eq(course_id))
            .filter(course_students::Column::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("查询课程学生关联失败: {e}")))?;

        Ok(count > 0)
    }

    fn filtered_courses(query: CourseListQuery) -> Select<Courses> {
        let mut select = Courses::find();

        if let Some(id) = query.id {
            select = select.filter(Column::Id.eq(id));
        }

        if let Some(name) = query.name {
            select = select.filter(Column::Name.eq(name));
        }

        select
    }

    fn is_foreign_key_violation(err: &DbErr) -> bool {
        matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
    }

    async fn ensure_user_exists(&self, user_id: i64) -> Result<()> {
        let user = Users::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("查询用户失败: {e}")))?;

        match user {
            Some(_) => Ok(()),
            None => Err(CourseApiError::validation(format!(
                "Invalid pk \"{user_id}\" - object does not exist."
            ))),
        }
    }

    /// 单个课程的学生 ID，走多对多关联
    async fn course_student_ids<C>(db: &C, course: &Model) -> Result<Vec<i64>>
    where
        C: ConnectionTrait,
    {
        let students = course
            .find_related(Students)
            .order_by_asc(students::Column::Id)
            .all(db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("查询课程学生失败: {e}")))?;

        Ok(students.into_iter().map(|s| s.id).collect())
    }

    /// 批量加载课程的学生 ID
    async fn load_course_students(&self, course_ids: &[i64]) -> Result<HashMap<i64, Vec<i64>>> {
        let mut map: HashMap<i64, Vec<i64>> = HashMap::new();
        if course_ids.is_empty() {
            return Ok(map);
        }

        let links = CourseStudents::find()
            .filter(course_students::Column::CourseId.is_in(course_ids.iter().copied()))
            .order_by_asc(course_students::Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| CourseApiError::database_operation(format!("查询课程学生失败: {e}")))?;

        for link in links {
            map.entry(link.course_id).or_default().push(link.student_id);
        }

        Ok(map)
    }
}
