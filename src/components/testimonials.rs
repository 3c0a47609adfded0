use yew::prelude::*;

struct Testimonial {
    name: &'static str,
    text: &'static str,
    date: &'static str,
    rating: u32,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah J.",
        text: "Chris George and his team were absolutely amazing! They helped me navigate through the complex disability process and won my case. I couldn't be more grateful for their expertise and dedication.",
        date: "2 weeks ago",
        rating: 5,
    },
    Testimonial {
        name: "Michael T.",
        text: "I was denied twice before coming to George & George. They took over my case and got me approved. Their knowledge of the system is incredible. Thank you!",
        date: "1 month ago",
        rating: 5,
    },
    Testimonial {
        name: "Patricia D.",
        text: "The best disability lawyers in Tennessee! They were always available to answer my questions and kept me informed throughout the entire process. Highly recommend!",
        date: "1 month ago",
        rating: 5,
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials-section" id="testimonials">
            <style>{STYLE}</style>
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"What Our Clients Say"}</h2>
                    <p>{"Read what clients have to say about their experience working with George & George Disability Law."}</p>
                </div>
                <div class="testimonial-grid">
                    {
                        TESTIMONIALS.iter().map(|testimonial| html! {
                            <div class="testimonial-card">
                                <div class="stars">
                                    { (0..testimonial.rating).map(|_| html! { <span>{"★"}</span> }).collect::<Html>() }
                                </div>
                                <p class="testimonial-text">{testimonial.text}</p>
                                <div class="testimonial-author">
                                    <p class="author-name">{testimonial.name}</p>
                                    <p class="author-date">{testimonial.date}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

const STYLE: &str = r#"
.testimonials-section {
    padding: 4rem 0;
    background: #f0f4f8;
}
.testimonials-section .section-inner {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.testimonials-section .section-heading {
    text-align: center;
    margin-bottom: 3rem;
}
.testimonials-section .section-heading h2 {
    font-size: 2.25rem;
    color: #102a43;
    margin-bottom: 1rem;
}
.testimonials-section .section-heading p {
    color: #486581;
    max-width: 40rem;
    margin: 0 auto;
}
.testimonial-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}
@media (min-width: 768px) {
    .testimonial-grid { grid-template-columns: repeat(3, 1fr); }
}
.testimonial-card {
    background: #fff;
    border-radius: 2px;
    padding: 1.5rem;
    box-shadow: 0 1px 4px rgba(16, 42, 67, 0.08);
    display: flex;
    flex-direction: column;
    height: 100%;
}
.stars {
    color: #f7c948;
    margin-bottom: 1rem;
    letter-spacing: 2px;
}
.testimonial-text {
    color: #486581;
    flex-grow: 1;
    margin-bottom: 1rem;
}
.author-name {
    font-weight: 500;
    color: #102a43;
}
.author-date {
    font-size: 0.85rem;
    color: #829ab1;
}
"#;
