use application::transfer::{CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};
use error_stack::{Report, ResultExt};
use serde::Deserialize;
use uuid::Uuid;

use crate::controller::{Intake, TryIntake};
use crate::error::RequestError;

// Missing text fields decode as empty so the service reports them as validation failures.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    published: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    published: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetBookRequest {
    #[serde(default)]
    id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteBookRequest {
    #[serde(default)]
    id: String,
}

pub struct BookTransformer;

fn parse_id(id: &str) -> error_stack::Result<Uuid, RequestError> {
    Uuid::parse_str(id.trim())
        .change_context(RequestError::InvalidIdentifier)
        .attach_printable_lazy(|| format!("`{id}` is not a valid book id"))
}

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            title: input.title,
            author: input.author,
            published: input.published.unwrap_or_default(),
            image: input.image,
            description: input.description,
        }
    }
}

impl TryIntake<UpdateBookRequest> for BookTransformer {
    type To = UpdateBookDto;
    type Error = Report<RequestError>;
    fn emit(&self, input: UpdateBookRequest) -> Result<Self::To, Self::Error> {
        Ok(UpdateBookDto {
            id: parse_id(&input.id)?,
            title: input.title,
            author: input.author,
            published: input.published.unwrap_or_default(),
            image: input.image,
            description: input.description,
        })
    }
}

impl TryIntake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    type Error = Report<RequestError>;
    fn emit(&self, input: GetBookRequest) -> Result<Self::To, Self::Error> {
        Ok(GetBookDto {
            id: parse_id(&input.id)?,
        })
    }
}

impl TryIntake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    type Error = Report<RequestError>;
    fn emit(&self, input: DeleteBookRequest) -> Result<Self::To, Self::Error> {
        Ok(DeleteBookDto {
            id: parse_id(&input.id)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{BookTransformer, GetBookRequest, UpdateBookRequest};
    use crate::controller::TryIntake;
    use crate::error::RequestError;

    #[test]
    fn unparseable_id_is_rejected() {
        for id in ["", "42", "not-a-uuid", "0000"] {
            let report = TryIntake::emit(&BookTransformer, GetBookRequest { id: id.to_string() })
                .unwrap_err();
            assert_eq!(report.current_context(), &RequestError::InvalidIdentifier);
        }
    }

    #[test]
    fn update_keeps_every_field() {
        let request: UpdateBookRequest = serde_json::from_str(
            r#"{
                "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
                "title": "Kindred",
                "author": "Octavia E. Butler",
                "published": "06/01/1979",
                "image": null
            }"#,
        )
        .unwrap();
        let dto = TryIntake::emit(&BookTransformer, request).unwrap();
        assert_eq!(dto.id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(dto.title, "Kindred");
        assert_eq!(dto.published, "06/01/1979");
        assert_eq!(dto.image, None);
        assert_eq!(dto.description, None);
    }
}
