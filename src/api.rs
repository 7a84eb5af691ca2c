use utoipa::OpenApi;

use crate::{controllers, models, requests, responses};

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Question"),
        (name = "Response"),
        (name = "Health"),
    ),
    paths(
        controllers::v1::question::index,
        controllers::v1::question::show,

        controllers::v1::response::store,
        controllers::v1::response::index,

        controllers::health::health,
    ),
    components(schemas(
        requests::v1::response::SubmitResponseRequest,

        responses::v1::question::Question,
        responses::v1::response::SurveyResponse,
        responses::v1::response::ResponseCreated,

        models::v1::question::QuestionType,
        models::v1::response::ResponseValue,

        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;
