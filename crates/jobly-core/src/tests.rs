#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use crate::client::JobClient;
    use crate::conversation::*;
    use crate::detail::*;
    use crate::event_bus::EventBus;
    use crate::mock::{MockJobBackend, DEFAULT_TOPIC};
    use crate::ports::*;
    use crate::suggestions::*;
    use crate::wire;
    use jobly_types::config::{AppConfig, ChatConfig};
    use jobly_types::error::DetailError;
    use jobly_types::event::ClientEvent;
    use jobly_types::job::{JobDetail, JobSummary};
    use jobly_types::message::{ChatReply, Role};
    use jobly_types::session::HistoryRecord;
    use jobly_types::{FailureKind, JoblyError};

    // ─── Test doubles ────────────────────────────────────────

    struct ImmediateTimer;

    #[async_trait(?Send)]
    impl TimerPort for ImmediateTimer {
        async fn sleep(&self, _ms: u64) {}
    }

    fn mock_backend() -> Rc<MockJobBackend> {
        Rc::new(MockJobBackend::new(Rc::new(ImmediateTimer), 2000))
    }

    fn mock_client() -> JobClient {
        JobClient::new(mock_backend(), ChatConfig::default())
    }

    /// Backend with scripted answers that records every call it receives
    struct ScriptedBackend {
        chat: jobly_types::Result<ChatReply>,
        search: jobly_types::Result<ChatReply>,
        detail: jobly_types::Result<JobDetail>,
        calls: RefCell<Vec<String>>,
        saved: RefCell<Vec<HistoryRecord>>,
    }

    impl ScriptedBackend {
        fn new() -> Self {
            Self {
                chat: Ok(ChatReply::new("respuesta", None)),
                search: Ok(ChatReply::new("búsqueda", None)),
                detail: Err(JoblyError::NotFound("x".to_string())),
                calls: RefCell::new(Vec::new()),
                saved: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl JobBackendPort for ScriptedBackend {
        async fn chat(&self, text: &str) -> jobly_types::Result<ChatReply> {
            self.calls.borrow_mut().push(format!("chat:{}", text));
            self.chat.clone()
        }

        async fn search_jobs(&self, text: &str) -> jobly_types::Result<ChatReply> {
            self.calls.borrow_mut().push(format!("search:{}", text));
            self.search.clone()
        }

        async fn job_detail(&self, job_id: &str) -> jobly_types::Result<JobDetail> {
            self.calls.borrow_mut().push(format!("detail:{}", job_id));
            self.detail.clone()
        }

        async fn save_history(&self, record: &HistoryRecord) -> jobly_types::Result<()> {
            self.calls.borrow_mut().push("history".to_string());
            self.saved.borrow_mut().push(record.clone());
            Ok(())
        }

        async fn health(&self) -> jobly_types::Result<HealthStatus> {
            Err(JoblyError::Transport("refused".to_string()))
        }

        fn backend_name(&self) -> &str {
            "scripted"
        }
    }

    fn scripted_client(backend: &Rc<ScriptedBackend>) -> JobClient {
        JobClient::new(backend.clone(), ChatConfig::default())
    }

    fn ids(reply_jobs: &Option<Vec<JobSummary>>) -> Vec<String> {
        reply_jobs
            .as_ref()
            .map(|jobs| jobs.iter().map(|j| j.id.clone()).collect())
            .unwrap_or_default()
    }

    // ─── Wire Tests ──────────────────────────────────────────

    #[test]
    fn test_decode_chat_with_jobs() {
        let reply = wire::decode_chat(
            r#"{"respuesta": "Aquí tienes", "empleos": [{"id": 7, "title": "QA"}]}"#,
        )
        .unwrap();
        assert_eq!(reply.text, "Aquí tienes");
        assert_eq!(ids(&reply.jobs), vec!["7"]);
        assert!(!reply.is_fallback());
    }

    #[test]
    fn test_decode_chat_empty_or_null_jobs() {
        let reply = wire::decode_chat(r#"{"respuesta": "Hola", "empleos": []}"#).unwrap();
        assert!(reply.jobs.is_none());
        let reply = wire::decode_chat(r#"{"respuesta": "Hola", "empleos": null}"#).unwrap();
        assert!(reply.jobs.is_none());
    }

    #[test]
    fn test_decode_chat_malformed() {
        assert!(matches!(
            wire::decode_chat(r#"{"answer": "wrong contract"}"#),
            Err(JoblyError::MalformedResponse(_))
        ));
        assert!(matches!(
            wire::decode_chat("<html>502</html>"),
            Err(JoblyError::MalformedResponse(_))
        ));
        match wire::decode_chat(r#"{"error": "Vectorstore no inicializado"}"#) {
            Err(JoblyError::MalformedResponse(msg)) => {
                assert_eq!(msg, "Vectorstore no inicializado")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_decode_search_variants() {
        let reply = wire::decode_search(
            r#"{"jobs": [{"id": 1}], "message": "Encontré 1 oferta"}"#,
            "datos",
        )
        .unwrap();
        assert_eq!(reply.text, "Encontré 1 oferta");

        let reply = wire::decode_search(
            r#"{"query": "datos", "results": [{"id": "a"}, {"id": "b"}], "total": 2}"#,
            "datos",
        )
        .unwrap();
        assert_eq!(reply.text, "Encontré 2 ofertas relacionadas con \"datos\"");
        assert_eq!(ids(&reply.jobs), vec!["a", "b"]);

        assert!(wire::decode_search(r#"{"message": "sin lista"}"#, "x").is_err());
    }

    #[test]
    fn test_decode_job_detail() {
        let job = wire::decode_job_detail(
            r#"{"found": true, "job": {"id": "42", "title": "Analista", "majors": []}}"#,
            "42",
        )
        .unwrap();
        assert_eq!(job.id(), "42");

        assert_eq!(
            wire::decode_job_detail(r#"{"found": false, "job": null}"#, "42"),
            Err(JoblyError::NotFound("42".to_string()))
        );
        assert!(matches!(
            wire::decode_job_detail(r#"{"found": true}"#, "42"),
            Err(JoblyError::MalformedResponse(_))
        ));
        assert!(matches!(
            wire::decode_job_detail(r#"{"job": {"id": 1}}"#, "1"),
            Err(JoblyError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(wire::status_error(404, ""), JoblyError::NotFound(_)));
        assert_eq!(
            wire::status_error(500, "boom"),
            JoblyError::Transport("HTTP 500: boom".to_string())
        );
        assert_eq!(
            wire::status_error(503, ""),
            JoblyError::Transport("HTTP 503".to_string())
        );
    }

    #[test]
    fn test_decode_health() {
        let status = wire::decode_health(r#"{"status": "OK", "message": "Servidor funcionando"}"#)
            .unwrap();
        assert!(status.is_ok());
        let status = wire::decode_health(r#"{"status": "degraded"}"#).unwrap();
        assert!(!status.is_ok());
    }

    #[test]
    fn test_request_bodies() {
        let body = serde_json::to_value(wire::ChatRequestBody { mensaje: "hola" }).unwrap();
        assert_eq!(body, serde_json::json!({"mensaje": "hola"}));
        let body = serde_json::to_value(wire::SearchRequestBody { query: "hola" }).unwrap();
        assert_eq!(body, serde_json::json!({"query": "hola"}));
        assert_eq!(wire::job_detail_path("12"), "/job/12");
    }

    // ─── Mock Backend Tests ──────────────────────────────────

    #[test]
    fn test_mock_data_analysis_query() {
        let backend = mock_backend();
        let query = "Quiero un trabajo de practicante en análisis de datos";
        let reply = block_on(backend.chat(query)).unwrap();
        assert_eq!(ids(&reply.jobs), vec!["1", "2"]);
        assert!(reply.text.contains(query));
    }

    #[test]
    fn test_mock_developer_query() {
        let backend = mock_backend();
        let reply = block_on(backend.chat("Busco empleo como desarrollador frontend con React"))
            .unwrap();
        assert_eq!(
            reply.text,
            "Encontré 2 ofertas relacionadas con \"Busco empleo como desarrollador frontend con React\""
        );
        assert_eq!(ids(&reply.jobs), vec!["3", "4"]);
    }

    #[test]
    fn test_mock_keyword_is_case_insensitive() {
        let backend = mock_backend();
        let (topic, jobs) = backend.match_topic("DESARROLLADOR Backend");
        assert_eq!(topic, "desarrollador");
        assert_eq!(jobs.len(), 2);
        let (topic, jobs) = backend.match_topic("Oportunidades en Marketing digital");
        assert_eq!(topic, "marketing");
        assert_eq!(jobs.len(), 1);
    }

    #[test]
    fn test_mock_unmatched_query_defaults_to_data_analysis() {
        let backend = mock_backend();
        let (topic, _) = backend.match_topic("Puestos de chef");
        assert_eq!(topic, DEFAULT_TOPIC);
        let reply = block_on(backend.search_jobs("Puestos de chef")).unwrap();
        assert_eq!(ids(&reply.jobs), vec!["1", "2"]);
    }

    #[test]
    fn test_mock_job_detail() {
        let backend = mock_backend();
        let job = block_on(backend.job_detail("4")).unwrap();
        assert_eq!(job.title(), "Desarrollador Full Stack");
        assert_eq!(
            block_on(backend.job_detail("999")),
            Err(JoblyError::NotFound("999".to_string()))
        );
    }

    #[test]
    fn test_mock_delay_goes_through_timer() {
        struct RecordingTimer(RefCell<Vec<u64>>);

        #[async_trait(?Send)]
        impl TimerPort for RecordingTimer {
            async fn sleep(&self, ms: u64) {
                self.0.borrow_mut().push(ms);
            }
        }

        let timer = Rc::new(RecordingTimer(RefCell::new(Vec::new())));
        let backend = MockJobBackend::new(timer.clone(), 1500);
        block_on(backend.chat("marketing")).unwrap();
        assert_eq!(*timer.0.borrow(), vec![1500]);
        assert_eq!(backend.backend_name(), "mock");
    }

    // ─── JobClient Tests ─────────────────────────────────────

    #[test]
    fn test_client_rejects_blank_input_without_calling_backend() {
        let backend = Rc::new(ScriptedBackend::new());
        let client = scripted_client(&backend);
        assert_eq!(block_on(client.send_chat_query("")), Err(JoblyError::EmptyInput));
        assert_eq!(block_on(client.send_chat_query(" \n\t ")), Err(JoblyError::EmptyInput));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_client_trims_query() {
        let backend = Rc::new(ScriptedBackend::new());
        let client = scripted_client(&backend);
        let reply = block_on(client.send_chat_query("  hola  ")).unwrap();
        assert_eq!(reply.text, "respuesta");
        assert_eq!(backend.calls(), vec!["chat:hola"]);
    }

    #[test]
    fn test_client_falls_back_to_search() {
        let mut backend = ScriptedBackend::new();
        backend.chat = Err(JoblyError::Transport("refused".to_string()));
        let backend = Rc::new(backend);
        let client = scripted_client(&backend);

        let reply = block_on(client.send_chat_query("datos")).unwrap();
        assert_eq!(reply.text, "búsqueda");
        assert!(!reply.is_fallback());
        assert_eq!(backend.calls(), vec!["chat:datos", "search:datos"]);
    }

    #[test]
    fn test_client_coerces_failures_into_error_reply() {
        let mut backend = ScriptedBackend::new();
        backend.chat = Err(JoblyError::MalformedResponse("bad".to_string()));
        backend.search = Err(JoblyError::Transport("timeout".to_string()));
        let backend = Rc::new(backend);
        let client = scripted_client(&backend);

        let reply = block_on(client.send_chat_query("datos")).unwrap();
        assert_eq!(reply.text, ChatConfig::default().error_message);
        assert_eq!(reply.failure, Some(FailureKind::Transport));
        assert!(reply.jobs.is_none());
    }

    #[test]
    fn test_client_detail_not_found() {
        let backend = Rc::new(ScriptedBackend::new());
        let client = scripted_client(&backend);
        let err = block_on(client.fetch_job_detail("nope")).unwrap_err();
        assert_eq!(err.message, "Empleo no encontrado");
        assert_eq!(err.kind, FailureKind::NotFound);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_client_detail_connection_error_is_retryable() {
        let mut backend = ScriptedBackend::new();
        backend.detail = Err(JoblyError::Transport("offline".to_string()));
        let client = scripted_client(&Rc::new(backend));
        let err = block_on(client.fetch_job_detail("3")).unwrap_err();
        assert_eq!(err.message, "Error al conectar con el servidor");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_client_detail_requires_id() {
        let backend = Rc::new(ScriptedBackend::new());
        let client = scripted_client(&backend);
        let err = block_on(client.fetch_job_detail("  ")).unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidInput);
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_client_save_history() {
        let backend = Rc::new(ScriptedBackend::new());
        let client = scripted_client(&backend);
        let conversation = Conversation::from_config(&AppConfig::default());

        let id = block_on(client.save_history(conversation.messages())).unwrap();
        assert!(id.starts_with("conv_"));
        let saved = backend.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, id);
        assert_eq!(saved[0].messages.len(), 1);
    }

    #[test]
    fn test_client_health() {
        assert!(block_on(mock_client().check_health()));
        let backend = Rc::new(ScriptedBackend::new());
        assert!(!block_on(scripted_client(&backend).check_health()));
    }

    // ─── Conversation Tests ──────────────────────────────────

    fn conversation() -> Conversation {
        Conversation::from_config(&AppConfig::default())
    }

    #[test]
    fn test_conversation_starts_with_welcome() {
        let conv = conversation();
        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.messages()[0].id, 1);
        assert_eq!(conv.messages()[0].role, Role::Assistant);
        assert_eq!(conv.phase(), TurnPhase::Idle);
        assert!(conv.loading_text().is_none());
        assert!(conv.suggestions_visible());
    }

    #[test]
    fn test_submit_starts_turn() {
        let mut conv = conversation();
        conv.apply(ChatAction::EditInput("  Busco marketing  ".to_string()));
        let effect = conv.apply(ChatAction::Submit);

        assert_eq!(
            effect,
            Some(ChatEffect::SendQuery {
                turn_id: 1,
                query: "Busco marketing".to_string()
            })
        );
        assert_eq!(conv.messages().len(), 2);
        assert_eq!(conv.messages()[1].role, Role::User);
        assert_eq!(conv.messages()[1].content, "Busco marketing");
        assert_eq!(conv.input(), "");
        assert_eq!(conv.phase(), TurnPhase::AwaitingResponse { turn_id: 1 });
        assert_eq!(conv.loading_text(), Some("Buscando empleos..."));
        assert!(!conv.suggestions_visible());
    }

    #[test]
    fn test_blank_submit_changes_nothing() {
        let mut conv = conversation();
        conv.apply(ChatAction::EditInput("   ".to_string()));
        assert!(!conv.can_submit());
        assert_eq!(conv.apply(ChatAction::Submit), None);
        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.input(), "   ");
        assert_eq!(conv.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_submit_while_awaiting_is_ignored() {
        let mut conv = conversation();
        conv.apply(ChatAction::EditInput("primera".to_string()));
        assert!(conv.apply(ChatAction::Submit).is_some());

        conv.apply(ChatAction::EditInput("segunda".to_string()));
        assert_eq!(conv.apply(ChatAction::Submit), None);
        assert_eq!(conv.messages().len(), 2);
        assert_eq!(conv.input(), "segunda");
        assert_eq!(conv.phase(), TurnPhase::AwaitingResponse { turn_id: 1 });
    }

    #[test]
    fn test_reply_completes_turn() {
        let mut conv = conversation();
        conv.apply(ChatAction::EditInput("desarrollador".to_string()));
        conv.apply(ChatAction::Submit);
        let jobs = vec![JobSummary::new("3", "Dev", "Acme", "Lima", "")];
        conv.apply(ChatAction::ReplyArrived {
            turn_id: 1,
            reply: ChatReply::new("Encontré 1", Some(jobs)),
        });

        assert_eq!(conv.messages().len(), 3);
        let last = &conv.messages()[2];
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.job_count(), 1);
        assert_eq!(last.id, 3);
        assert_eq!(conv.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_stale_reply_is_dropped() {
        let mut conv = conversation();
        conv.apply(ChatAction::ReplyArrived {
            turn_id: 7,
            reply: ChatReply::new("tarde", None),
        });
        assert_eq!(conv.messages().len(), 1);

        conv.apply(ChatAction::EditInput("hola".to_string()));
        conv.apply(ChatAction::Submit);
        conv.apply(ChatAction::ReplyArrived {
            turn_id: 2,
            reply: ChatReply::new("otro turno", None),
        });
        assert_eq!(conv.messages().len(), 2);
        assert!(conv.is_busy());
    }

    #[test]
    fn test_fallback_reply_still_counts_as_turn() {
        let mut conv = conversation();
        conv.apply(ChatAction::EditInput("hola".to_string()));
        conv.apply(ChatAction::Submit);
        conv.apply(ChatAction::ReplyArrived {
            turn_id: 1,
            reply: ChatReply::fallback("Lo siento", FailureKind::Transport),
        });
        assert_eq!(conv.messages().len(), 3);
        assert_eq!(conv.messages()[2].content, "Lo siento");
        assert!(!conv.is_busy());
    }

    #[test]
    fn test_every_completed_turn_adds_two_messages() {
        let mut backend = ScriptedBackend::new();
        backend.chat = Err(JoblyError::Transport("down".to_string()));
        backend.search = Err(JoblyError::Transport("down".to_string()));
        let failing = scripted_client(&Rc::new(backend));
        let working = mock_client();

        let mut conv = conversation();
        for (i, client) in [&working, &failing, &working].iter().enumerate() {
            conv.apply(ChatAction::EditInput(format!("consulta {}", i)));
            assert!(block_on(conv.run_turn(client)));
            assert_eq!(conv.messages().len(), 1 + 2 * (i + 1));
            assert_eq!(conv.phase(), TurnPhase::Idle);
        }

        let ids: Vec<u64> = conv.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_run_turn_with_blank_input_makes_no_call() {
        let backend = Rc::new(ScriptedBackend::new());
        let client = scripted_client(&backend);
        let mut conv = conversation();
        assert!(!block_on(conv.run_turn(&client)));
        assert!(backend.calls().is_empty());
        assert_eq!(conv.messages().len(), 1);
    }

    #[test]
    fn test_mock_scenario_developer_search() {
        let client = mock_client();
        let mut conv = conversation();
        let query = "Busco empleo como desarrollador frontend con React";
        conv.apply(ChatAction::SelectSuggestion(SUGGESTED_QUERIES[1].to_string()));
        assert_eq!(conv.input(), query);
        assert_eq!(conv.messages().len(), 1);

        block_on(conv.run_turn(&client));

        let bot = &conv.messages()[2];
        assert!(bot.content.contains(
            "Encontré 2 ofertas relacionadas con \"Busco empleo como desarrollador frontend con React\""
        ));
        assert_eq!(ids(&bot.jobs), vec!["3", "4"]);
        assert!(!conv.suggestions_visible());
    }

    #[test]
    fn test_input_is_capped() {
        let mut conv = Conversation::new(ChatConfig::default(), 5);
        conv.apply(ChatAction::EditInput("análisis".to_string()));
        assert_eq!(conv.input(), "análi");
        assert_eq!(conv.max_input_chars(), 5);
    }

    #[test]
    fn test_reset_drops_in_flight_turn() {
        let mut conv = conversation();
        conv.apply(ChatAction::EditInput("hola".to_string()));
        conv.apply(ChatAction::Submit);
        conv.reset();
        assert_eq!(conv.messages().len(), 1);
        assert!(!conv.is_busy());

        conv.apply(ChatAction::ReplyArrived {
            turn_id: 1,
            reply: ChatReply::new("tarde", None),
        });
        assert_eq!(conv.messages().len(), 1);
    }

    #[test]
    fn test_restart_applies_config_and_keeps_turn_ids_increasing() {
        let mut conv = conversation();
        conv.apply(ChatAction::EditInput("vieja".to_string()));
        let Some(ChatEffect::SendQuery { turn_id: old_turn, .. }) = conv.apply(ChatAction::Submit)
        else {
            panic!("expected a query");
        };

        let mut config = AppConfig::default();
        config.ui.max_message_length = 4;
        config.chat.welcome_message = "Hola de nuevo".to_string();
        conv.restart(&config);
        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.messages()[0].content, "Hola de nuevo");
        assert_eq!(conv.max_input_chars(), 4);

        conv.apply(ChatAction::EditInput("nueva".to_string()));
        assert_eq!(conv.input(), "nuev");
        let Some(ChatEffect::SendQuery { turn_id: new_turn, .. }) = conv.apply(ChatAction::Submit)
        else {
            panic!("expected a query");
        };
        assert!(new_turn > old_turn);

        conv.apply(ChatAction::ReplyArrived {
            turn_id: old_turn,
            reply: ChatReply::new("respuesta vieja", None),
        });
        assert_eq!(conv.phase(), TurnPhase::AwaitingResponse { turn_id: new_turn });
        assert_eq!(conv.messages().len(), 2);
    }

    // ─── Job Detail View Tests ───────────────────────────────

    fn job(id: &str) -> JobDetail {
        JobDetail::from(JobSummary::new(id, format!("Job {}", id), "Acme", "Lima", ""))
    }

    #[test]
    fn test_detail_open_and_load() {
        let mut view = JobDetailView::new();
        assert!(!view.is_open());

        let req = view.open("3");
        assert_eq!(req.job_id, "3");
        assert!(view.is_loading());
        assert_eq!(view.job_id(), Some("3"));
        assert!(view.job().is_none());

        assert!(view.resolve(req.seq, Ok(job("3"))));
        assert_eq!(view.job().map(|j| j.id()), Some("3"));
        assert!(!view.is_loading());
    }

    #[test]
    fn test_detail_latest_request_wins() {
        let mut view = JobDetailView::new();
        let first = view.open("1");
        let second = view.open("2");
        assert!(second.seq > first.seq);

        assert!(!view.resolve(first.seq, Ok(job("1"))));
        assert!(view.is_loading());
        assert_eq!(view.job_id(), Some("2"));

        assert!(view.resolve(second.seq, Ok(job("2"))));
        assert!(!view.resolve(first.seq, Ok(job("1"))));
        assert_eq!(view.job().map(|j| j.id()), Some("2"));
    }

    #[test]
    fn test_detail_close_discards_late_response() {
        let mut view = JobDetailView::new();
        let req = view.open("1");
        view.close();
        assert!(!view.resolve(req.seq, Ok(job("1"))));
        assert_eq!(view.state(), &DetailState::Closed);
    }

    #[test]
    fn test_detail_reopen_never_shows_previous_job() {
        let mut view = JobDetailView::new();
        let req = view.open("1");
        view.resolve(req.seq, Ok(job("1")));
        view.close();

        view.open("2");
        assert!(view.job().is_none());
        assert_eq!(view.state(), &DetailState::Loading { job_id: "2".to_string() });

        // same id again still fetches
        view.close();
        let again = view.open("2");
        assert!(view.is_loading());
        assert_eq!(again.job_id, "2");
    }

    #[test]
    fn test_detail_retry_reissues_same_job() {
        let mut view = JobDetailView::new();
        assert!(view.retry().is_none());

        let req = view.open("5");
        let error = DetailError::from(JoblyError::Transport("offline".to_string()));
        view.resolve(req.seq, Err(error.clone()));
        assert_eq!(view.error(), Some(&error));

        let retry = view.retry().unwrap();
        assert_eq!(retry.job_id, "5");
        assert!(retry.seq > req.seq);
        assert!(view.is_loading());
        assert!(view.retry().is_none());
    }

    #[test]
    fn test_detail_load_nonexistent_job() {
        let client = mock_client();
        let mut view = JobDetailView::new();
        block_on(view.load("999", &client));

        assert!(view.job().is_none());
        let error = view.error().unwrap();
        assert_eq!(error.message, "Empleo no encontrado");
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_detail_load_each_open_refetches() {
        let mut backend = ScriptedBackend::new();
        backend.detail = Ok(job("3"));
        let backend = Rc::new(backend);
        let client = scripted_client(&backend);

        let mut view = JobDetailView::new();
        block_on(view.load("3", &client));
        view.close();
        block_on(view.load("3", &client));

        assert_eq!(backend.calls(), vec!["detail:3", "detail:3"]);
        assert!(view.job().is_some());
    }

    // ─── Suggestions Tests ───────────────────────────────────

    #[test]
    fn test_suggestions_visibility() {
        assert!(suggestions_visible(0, false));
        assert!(suggestions_visible(2, false));
        assert!(!suggestions_visible(3, false));
        assert!(!suggestions_visible(1, true));
        assert_eq!(SUGGESTED_QUERIES.len(), 6);
    }

    // ─── EventBus Tests ──────────────────────────────────────

    #[test]
    fn test_event_bus_emit_and_drain() {
        let bus: EventBus = EventBus::new();
        assert!(!bus.has_pending());

        bus.emit(ClientEvent::HealthChecked { online: true });
        bus.emit(ClientEvent::HistorySaved { id: "conv_1_abcd".to_string() });

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ClientEvent::HealthChecked { online: true }));
        assert!(!bus.has_pending());
    }

    #[test]
    fn test_event_bus_clone_shares_queue() {
        let bus1: EventBus = EventBus::new();
        let bus2 = bus1.clone();
        bus1.emit(ClientEvent::HealthChecked { online: false });
        assert!(bus2.has_pending());
        assert_eq!(bus2.drain().len(), 1);
        assert!(!bus1.has_pending());
    }
}
