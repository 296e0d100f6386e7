//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use async_trait::async_trait;
use lodging_server::{
    domain::{
        CreateAddress, CreateEnrollment, CreateHotel, CreateRoom, CreateTicket, CreateTicketType,
        CreateUser, Enrollment, Hotel, HotelId, HotelRepository, HotelWithRooms, RepositoryError,
        Room, Ticket, TicketStatus, TicketType, Timestamp, User, UserId,
    },
    infrastructure::repository::{
        InMemoryDatabase, InMemoryEnrollmentRepository, InMemoryTicketRepository,
    },
    ui::{AppState, USER_ID_HEADER, build_app},
};
use tokio::{net::TcpListener, task::JoinHandle};

/// In-process server bound to an ephemeral port
pub struct TestServer {
    addr: SocketAddr,
    pub db: InMemoryDatabase,
    client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by a fresh in-memory database
    pub async fn start() -> Self {
        let db = InMemoryDatabase::new();
        let state = Arc::new(AppState::in_memory(db.clone()));
        Self::start_with_state(db, state).await
    }

    /// Start a server whose hotel repository always fails
    pub async fn start_with_failing_hotels() -> Self {
        let db = InMemoryDatabase::new();
        let state = Arc::new(AppState::new(
            Arc::new(InMemoryEnrollmentRepository::new(db.clone())),
            Arc::new(InMemoryTicketRepository::new(db.clone())),
            Arc::new(FailingHotelRepository),
        ));
        Self::start_with_state(db, state).await
    }

    async fn start_with_state(db: InMemoryDatabase, state: Arc<AppState>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let app = build_app(state);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            addr,
            db,
            client: reqwest::Client::new(),
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// GET without identity
    pub async fn get_anonymous(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await
            .expect("Failed to send request")
    }

    /// GET as the given user
    pub async fn get_as(&self, user_id: UserId, path: &str) -> reqwest::Response {
        self.get_with_identity(&user_id.to_string(), path).await
    }

    /// GET with a raw identity header value
    pub async fn get_with_identity(&self, identity: &str, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url(), path))
            .header(USER_ID_HEADER, identity)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn create_user(&self) -> User {
        self.db
            .insert_user(CreateUser {
                email: format!("user{}@example.com", self.addr.port()),
            })
            .await
            .expect("Failed to create user")
    }

    pub async fn create_enrollment_with_address(&self, user: &User) -> Enrollment {
        let enrollment = self
            .db
            .insert_enrollment(CreateEnrollment {
                user_id: user.id,
                name: "lulu".to_string(),
                cpf: "77876066496".to_string(),
                birthday: Timestamp::new(1_675_043_954_048),
                phone: "(21)98559-9999".to_string(),
            })
            .await
            .expect("Failed to create enrollment");
        self.db
            .insert_address(CreateAddress {
                enrollment_id: enrollment.id,
                cep: "87020-260".to_string(),
                street: "Rua Secreta".to_string(),
                city: "Maringá".to_string(),
                state: "PR".to_string(),
                number: "1001".to_string(),
                neighborhood: "Centro".to_string(),
                address_detail: None,
            })
            .await
            .expect("Failed to create address");
        enrollment
    }

    pub async fn create_ticket_type(&self, is_remote: bool, includes_hotel: bool) -> TicketType {
        self.db
            .insert_ticket_type(CreateTicketType {
                name: "tipo1".to_string(),
                price: 22,
                is_remote,
                includes_hotel,
            })
            .await
            .expect("Failed to create ticket type")
    }

    pub async fn create_ticket(
        &self,
        enrollment: &Enrollment,
        ticket_type: &TicketType,
        status: TicketStatus,
    ) -> Ticket {
        self.db
            .insert_ticket(CreateTicket {
                enrollment_id: enrollment.id,
                ticket_type_id: ticket_type.id,
                status,
            })
            .await
            .expect("Failed to create ticket")
    }

    /// User with an enrollment and a ticket of the given kind
    pub async fn create_ticket_holder(
        &self,
        status: TicketStatus,
        is_remote: bool,
        includes_hotel: bool,
    ) -> User {
        let user = self.create_user().await;
        let enrollment = self.create_enrollment_with_address(&user).await;
        let ticket_type = self.create_ticket_type(is_remote, includes_hotel).await;
        self.create_ticket(&enrollment, &ticket_type, status).await;
        user
    }

    pub async fn create_hotel(&self, name: &str) -> Hotel {
        self.db
            .insert_hotel(CreateHotel {
                name: name.to_string(),
                image: format!("https://example.com/{name}.png"),
            })
            .await
            .expect("Failed to create hotel")
    }

    pub async fn create_room(&self, hotel: &Hotel, name: &str, capacity: i32) -> Room {
        self.db
            .insert_room(CreateRoom {
                hotel_id: hotel.id,
                name: name.to_string(),
                capacity,
            })
            .await
            .expect("Failed to create room")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Hotel repository standing in for an unreachable store
pub struct FailingHotelRepository;

#[async_trait]
impl HotelRepository for FailingHotelRepository {
    async fn find_all(&self) -> Result<Vec<Hotel>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }

    async fn find_with_rooms(
        &self,
        _hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }
}
