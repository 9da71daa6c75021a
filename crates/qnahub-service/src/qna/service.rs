//! Question/answer operations.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{error, info, warn};
use uuid::Uuid;

use qnahub_core::error::AppError;
use qnahub_core::result::AppResult;
use qnahub_core::traits::{AnswerStore, QuestionStore, UserDirectory};
use qnahub_core::types::QuestionFilter;
use qnahub_entity::answer::{Answer, CreateAnswer};
use qnahub_entity::question::view::AnswerView;
use qnahub_entity::question::{CreateQuestion, Question, QuestionDetail, QuestionSummary};
use qnahub_entity::user::UserProfile;

use crate::context::RequestContext;

use super::guard::AcceptGuard;

/// Input for creating a question.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateQuestionInput {
    /// Question title.
    pub title: String,
    /// Question description.
    pub description: String,
    /// Optional category.
    pub category: Option<String>,
    /// Tag labels.
    pub tags: Vec<String>,
}

/// Input for posting an answer.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PostAnswerInput {
    /// The answer body.
    pub answer_text: String,
}

/// Orchestrates the question/answer operations over the injected stores.
///
/// All durable state lives in the stores; the service holds no mutable
/// state of its own, so operations from unrelated requests run concurrently
/// without coordination.
pub struct QnaService {
    questions: Arc<dyn QuestionStore>,
    answers: Arc<dyn AnswerStore>,
    users: Arc<dyn UserDirectory>,
    guard: AcceptGuard,
}

impl QnaService {
    /// Creates a new service over the given stores.
    pub fn new(
        questions: Arc<dyn QuestionStore>,
        answers: Arc<dyn AnswerStore>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            questions,
            answers,
            users,
            guard: AcceptGuard::new(),
        }
    }

    /// Creates a new question asked by the current caller.
    pub async fn create_question(
        &self,
        ctx: &RequestContext,
        input: CreateQuestionInput,
    ) -> AppResult<Question> {
        if input.title.trim().is_empty() || input.description.trim().is_empty() {
            return Err(AppError::validation("Title and description are required"));
        }

        let question = self
            .questions
            .create(&CreateQuestion {
                title: input.title,
                description: input.description,
                category: input.category,
                tags: input.tags,
                asked_by: ctx.user_id,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            question_id = %question.id,
            "Question created"
        );

        Ok(question)
    }

    /// Lists questions matching the filter, each with the asker expanded.
    pub async fn list_questions(
        &self,
        filter: &QuestionFilter,
    ) -> AppResult<Vec<QuestionSummary>> {
        let questions = self.questions.find(filter).await?;

        let summaries = join_all(questions.into_iter().map(|question| async move {
            let asker = self.resolve_profile(question.asked_by).await;
            QuestionSummary { question, asker }
        }))
        .await;

        Ok(summaries)
    }

    /// Fetches a question with asker and all linked answers expanded.
    pub async fn get_question(&self, question_id: Uuid) -> AppResult<QuestionDetail> {
        let question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Question {question_id} not found")))?;

        let asker = self.resolve_profile(question.asked_by).await;

        // The question's answer list is authoritative for membership and
        // order; an answer created but never linked stays out of the detail
        // view and is reachable only by direct lookup.
        let mut by_id: HashMap<Uuid, Answer> = self
            .answers
            .find_by_question(question.id)
            .await?
            .into_iter()
            .map(|answer| (answer.id, answer))
            .collect();

        let mut answers = Vec::with_capacity(question.answer_ids.len());
        for answer_id in &question.answer_ids {
            if let Some(answer) = by_id.remove(answer_id) {
                let author = self.resolve_profile(answer.answered_by).await;
                answers.push(AnswerView { answer, author });
            }
        }

        Ok(QuestionDetail {
            question,
            asker,
            answers,
        })
    }

    /// Posts an answer to a question by the current caller.
    ///
    /// The answer record is created first, then linked to the question. If
    /// the link step fails the error is returned to the caller — the
    /// already-created answer is left unlinked rather than silently
    /// reported as success.
    pub async fn post_answer(
        &self,
        ctx: &RequestContext,
        question_id: Uuid,
        input: PostAnswerInput,
    ) -> AppResult<Answer> {
        if input.answer_text.trim().is_empty() {
            return Err(AppError::validation("Answer text is required"));
        }

        let question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Question {question_id} not found")))?;

        let answer = self
            .answers
            .create(&CreateAnswer {
                question_id: question.id,
                answer_text: input.answer_text,
                answered_by: ctx.user_id,
            })
            .await?;

        if let Err(e) = self.questions.append_answer(question.id, answer.id).await {
            error!(
                question_id = %question.id,
                answer_id = %answer.id,
                error = %e,
                "Answer created but not linked to its question"
            );
            return Err(e);
        }

        info!(
            user_id = %ctx.user_id,
            question_id = %question.id,
            answer_id = %answer.id,
            "Answer posted"
        );

        Ok(answer)
    }

    /// Marks an answer as accepted.
    ///
    /// Only the question's asker may accept. Re-accepting the same answer
    /// is a no-op; accepting a different answer once one is accepted fails
    /// with `AlreadyAccepted`.
    pub async fn accept_answer(
        &self,
        ctx: &RequestContext,
        question_id: Uuid,
        answer_id: Uuid,
    ) -> AppResult<Answer> {
        let question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Question {question_id} not found")))?;

        let mut answer = self
            .answers
            .find_by_id(answer_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Answer {answer_id} not found")))?;

        if answer.question_id != question.id {
            return Err(AppError::not_found(format!(
                "Answer {answer_id} does not belong to question {question_id}"
            )));
        }

        self.guard.require_accept(&question, ctx.user_id)?;

        self.answers.mark_accepted(answer.id).await?;
        answer.is_accepted = true;

        info!(
            user_id = %ctx.user_id,
            question_id = %question.id,
            answer_id = %answer.id,
            "Answer accepted"
        );

        Ok(answer)
    }

    /// Resolve a profile, degrading to `None` on directory failure.
    async fn resolve_profile(&self, user_id: Uuid) -> Option<UserProfile> {
        match self.users.resolve(user_id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to resolve user profile");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use qnahub_core::error::ErrorKind;

    #[derive(Default)]
    struct InMemoryQuestionStore {
        rows: Mutex<HashMap<Uuid, Question>>,
        fail_append: AtomicBool,
    }

    #[async_trait]
    impl QuestionStore for InMemoryQuestionStore {
        async fn create(&self, data: &CreateQuestion) -> AppResult<Question> {
            let question = Question {
                id: Uuid::new_v4(),
                title: data.title.clone(),
                description: data.description.clone(),
                category: data.category.clone(),
                tags: data.tags.clone(),
                asked_by: data.asked_by,
                answer_ids: vec![],
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            self.rows
                .lock()
                .unwrap()
                .insert(question.id, question.clone());
            Ok(question)
        }

        async fn find(&self, filter: &QuestionFilter) -> AppResult<Vec<Question>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .values()
                .filter(|q| match &filter.category {
                    Some(category) => q.category.as_deref() == Some(category),
                    None => true,
                })
                .filter(|q| {
                    filter.tags.is_empty() || q.tags.iter().any(|t| filter.tags.contains(t))
                })
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Question>> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn append_answer(&self, question_id: Uuid, answer_id: Uuid) -> AppResult<()> {
            if self.fail_append.load(Ordering::SeqCst) {
                return Err(AppError::database("link step unavailable"));
            }
            let mut rows = self.rows.lock().unwrap();
            let question = rows
                .get_mut(&question_id)
                .ok_or_else(|| AppError::not_found(format!("Question {question_id} not found")))?;
            question.answer_ids.push(answer_id);
            question.updated_at = Utc::now();
            Ok(())
        }
    }

    #[derive(Default)]
    struct InMemoryAnswerStore {
        rows: Mutex<HashMap<Uuid, Answer>>,
    }

    #[async_trait]
    impl AnswerStore for InMemoryAnswerStore {
        async fn create(&self, data: &CreateAnswer) -> AppResult<Answer> {
            let answer = Answer {
                id: Uuid::new_v4(),
                question_id: data.question_id,
                answer_text: data.answer_text.clone(),
                answered_by: data.answered_by,
                is_accepted: false,
                created_at: Utc::now(),
            };
            self.rows.lock().unwrap().insert(answer.id, answer.clone());
            Ok(answer)
        }

        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Answer>> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_question(&self, question_id: Uuid) -> AppResult<Vec<Answer>> {
            let rows = self.rows.lock().unwrap();
            let mut answers: Vec<Answer> = rows
                .values()
                .filter(|a| a.question_id == question_id)
                .cloned()
                .collect();
            answers.sort_by_key(|a| a.created_at);
            Ok(answers)
        }

        async fn mark_accepted(&self, id: Uuid) -> AppResult<()> {
            let mut rows = self.rows.lock().unwrap();
            let question_id = rows
                .get(&id)
                .map(|a| a.question_id)
                .ok_or_else(|| AppError::not_found(format!("Answer {id} not found")))?;

            let other_accepted = rows
                .values()
                .any(|a| a.question_id == question_id && a.is_accepted && a.id != id);
            if other_accepted {
                return Err(AppError::already_accepted(
                    "Another answer on this question is already accepted",
                ));
            }

            rows.get_mut(&id).unwrap().is_accepted = true;
            Ok(())
        }
    }

    #[derive(Default)]
    struct InMemoryDirectory {
        rows: Mutex<HashMap<Uuid, UserProfile>>,
    }

    impl InMemoryDirectory {
        fn insert(&self, id: Uuid, name: &str, email: &str) {
            self.rows.lock().unwrap().insert(
                id,
                UserProfile {
                    name: name.to_string(),
                    email: email.to_string(),
                },
            );
        }
    }

    #[async_trait]
    impl UserDirectory for InMemoryDirectory {
        async fn resolve(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }
    }

    struct Harness {
        questions: Arc<InMemoryQuestionStore>,
        answers: Arc<InMemoryAnswerStore>,
        directory: Arc<InMemoryDirectory>,
        service: QnaService,
    }

    fn harness() -> Harness {
        let questions = Arc::new(InMemoryQuestionStore::default());
        let answers = Arc::new(InMemoryAnswerStore::default());
        let directory = Arc::new(InMemoryDirectory::default());
        let service = QnaService::new(
            Arc::clone(&questions) as Arc<dyn QuestionStore>,
            Arc::clone(&answers) as Arc<dyn AnswerStore>,
            Arc::clone(&directory) as Arc<dyn UserDirectory>,
        );
        Harness {
            questions,
            answers,
            directory,
            service,
        }
    }

    fn ctx(user_id: Uuid) -> RequestContext {
        RequestContext::new(user_id, "Test User".to_string())
    }

    fn question_input(title: &str, description: &str) -> CreateQuestionInput {
        CreateQuestionInput {
            title: title.to_string(),
            description: description.to_string(),
            category: None,
            tags: vec![],
        }
    }

    fn answer_input(text: &str) -> PostAnswerInput {
        PostAnswerInput {
            answer_text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_question_starts_with_no_answers() {
        let h = harness();
        let asker = Uuid::new_v4();

        let question = h
            .service
            .create_question(&ctx(asker), question_input("Q1", "D1"))
            .await
            .expect("create question");

        assert!(question.answer_ids.is_empty());
        assert_eq!(question.asked_by, asker);
        assert!(
            h.questions
                .find_by_id(question.id)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_create_question_rejects_blank_fields() {
        let h = harness();

        for (title, description) in [("", "D1"), ("Q1", ""), ("   ", "D1"), ("Q1", "   ")] {
            let err = h
                .service
                .create_question(&ctx(Uuid::new_v4()), question_input(title, description))
                .await
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }

        // No record was created by any of the rejected attempts.
        assert!(h.questions.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_post_answer_links_exactly_once() {
        let h = harness();
        let asker = Uuid::new_v4();
        let answerer = Uuid::new_v4();

        let question = h
            .service
            .create_question(&ctx(asker), question_input("Q1", "D1"))
            .await
            .unwrap();
        let answer = h
            .service
            .post_answer(&ctx(answerer), question.id, answer_input("A1"))
            .await
            .expect("post answer");

        let detail = h.service.get_question(question.id).await.unwrap();
        let linked: Vec<Uuid> = detail
            .question
            .answer_ids
            .iter()
            .filter(|id| **id == answer.id)
            .copied()
            .collect();
        assert_eq!(linked.len(), 1);
        assert_eq!(detail.answers.len(), 1);
        assert_eq!(detail.answers[0].answer.answer_text, "A1");
        assert!(!detail.answers[0].answer.is_accepted);
    }

    #[tokio::test]
    async fn test_post_answer_rejects_blank_text() {
        let h = harness();
        let question = h
            .service
            .create_question(&ctx(Uuid::new_v4()), question_input("Q1", "D1"))
            .await
            .unwrap();

        let err = h
            .service
            .post_answer(&ctx(Uuid::new_v4()), question.id, answer_input("  "))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(h.answers.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_post_answer_unknown_question() {
        let h = harness();
        let err = h
            .service
            .post_answer(&ctx(Uuid::new_v4()), Uuid::new_v4(), answer_input("A1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_failed_link_surfaces_error_and_leaves_orphan() {
        let h = harness();
        let question = h
            .service
            .create_question(&ctx(Uuid::new_v4()), question_input("Q1", "D1"))
            .await
            .unwrap();

        h.questions.fail_append.store(true, Ordering::SeqCst);
        let err = h
            .service
            .post_answer(&ctx(Uuid::new_v4()), question.id, answer_input("A1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);

        // The orphan exists by direct lookup but is absent from the
        // question detail.
        let orphan_id = *h.answers.rows.lock().unwrap().keys().next().unwrap();
        assert!(h.answers.find_by_id(orphan_id).await.unwrap().is_some());

        h.questions.fail_append.store(false, Ordering::SeqCst);
        let detail = h.service.get_question(question.id).await.unwrap();
        assert!(detail.answers.is_empty());
    }

    #[tokio::test]
    async fn test_accept_requires_asker() {
        let h = harness();
        let asker = Uuid::new_v4();
        let answerer = Uuid::new_v4();

        let question = h
            .service
            .create_question(&ctx(asker), question_input("Q1", "D1"))
            .await
            .unwrap();
        let answer = h
            .service
            .post_answer(&ctx(answerer), question.id, answer_input("A1"))
            .await
            .unwrap();

        // The answerer cannot accept their own answer.
        let err = h
            .service
            .accept_answer(&ctx(answerer), question.id, answer.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert!(
            !h.answers
                .find_by_id(answer.id)
                .await
                .unwrap()
                .unwrap()
                .is_accepted
        );

        let accepted = h
            .service
            .accept_answer(&ctx(asker), question.id, answer.id)
            .await
            .expect("asker accepts");
        assert!(accepted.is_accepted);
        assert!(
            h.answers
                .find_by_id(answer.id)
                .await
                .unwrap()
                .unwrap()
                .is_accepted
        );
    }

    #[tokio::test]
    async fn test_accept_is_idempotent_for_same_answer() {
        let h = harness();
        let asker = Uuid::new_v4();

        let question = h
            .service
            .create_question(&ctx(asker), question_input("Q1", "D1"))
            .await
            .unwrap();
        let answer = h
            .service
            .post_answer(&ctx(Uuid::new_v4()), question.id, answer_input("A1"))
            .await
            .unwrap();

        h.service
            .accept_answer(&ctx(asker), question.id, answer.id)
            .await
            .unwrap();
        let again = h
            .service
            .accept_answer(&ctx(asker), question.id, answer.id)
            .await
            .expect("second accept of the same answer succeeds");
        assert!(again.is_accepted);
    }

    #[tokio::test]
    async fn test_accept_second_answer_is_rejected() {
        let h = harness();
        let asker = Uuid::new_v4();

        let question = h
            .service
            .create_question(&ctx(asker), question_input("Q1", "D1"))
            .await
            .unwrap();
        let first = h
            .service
            .post_answer(&ctx(Uuid::new_v4()), question.id, answer_input("A1"))
            .await
            .unwrap();
        let second = h
            .service
            .post_answer(&ctx(Uuid::new_v4()), question.id, answer_input("A2"))
            .await
            .unwrap();

        h.service
            .accept_answer(&ctx(asker), question.id, first.id)
            .await
            .unwrap();

        let err = h
            .service
            .accept_answer(&ctx(asker), question.id, second.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyAccepted);
        assert!(
            !h.answers
                .find_by_id(second.id)
                .await
                .unwrap()
                .unwrap()
                .is_accepted
        );
    }

    #[tokio::test]
    async fn test_accept_answer_from_other_question() {
        let h = harness();
        let asker = Uuid::new_v4();

        let question = h
            .service
            .create_question(&ctx(asker), question_input("Q1", "D1"))
            .await
            .unwrap();
        let other = h
            .service
            .create_question(&ctx(asker), question_input("Q2", "D2"))
            .await
            .unwrap();
        let stray = h
            .service
            .post_answer(&ctx(Uuid::new_v4()), other.id, answer_input("A1"))
            .await
            .unwrap();

        let err = h
            .service
            .accept_answer(&ctx(asker), question.id, stray.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_expansion_resolves_profiles_and_degrades() {
        let h = harness();
        let asker = Uuid::new_v4();
        let answerer = Uuid::new_v4();
        h.directory.insert(asker, "Asker", "asker@example.com");
        // The answerer is deliberately absent from the directory.

        let question = h
            .service
            .create_question(&ctx(asker), question_input("Q1", "D1"))
            .await
            .unwrap();
        h.service
            .post_answer(&ctx(answerer), question.id, answer_input("A1"))
            .await
            .unwrap();

        let detail = h.service.get_question(question.id).await.unwrap();
        assert_eq!(detail.asker.as_ref().unwrap().name, "Asker");
        assert!(detail.answers[0].author.is_none());
    }

    #[tokio::test]
    async fn test_list_questions_filters_by_category_and_tags() {
        let h = harness();
        let asker = Uuid::new_v4();

        h.service
            .create_question(
                &ctx(asker),
                CreateQuestionInput {
                    title: "Math Q".to_string(),
                    description: "D".to_string(),
                    category: Some("math".to_string()),
                    tags: vec!["algebra".to_string()],
                },
            )
            .await
            .unwrap();
        h.service
            .create_question(
                &ctx(asker),
                CreateQuestionInput {
                    title: "History Q".to_string(),
                    description: "D".to_string(),
                    category: Some("history".to_string()),
                    tags: vec!["rome".to_string()],
                },
            )
            .await
            .unwrap();

        let by_category = h
            .service
            .list_questions(&QuestionFilter {
                category: Some("math".to_string()),
                tags: vec![],
            })
            .await
            .unwrap();
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].question.title, "Math Q");

        let by_tags = h
            .service
            .list_questions(&QuestionFilter {
                category: None,
                tags: vec!["rome".to_string(), "greece".to_string()],
            })
            .await
            .unwrap();
        assert_eq!(by_tags.len(), 1);
        assert_eq!(by_tags[0].question.title, "History Q");

        let all = h
            .service
            .list_questions(&QuestionFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let none = h
            .service
            .list_questions(&QuestionFilter {
                category: Some("science".to_string()),
                tags: vec![],
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_get_question_not_found() {
        let h = harness();
        let err = h.service.get_question(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
